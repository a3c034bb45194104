pub mod apns;
pub mod aws;
pub mod config;
pub mod delivery;
pub mod device;
pub mod error;
pub mod gcm;
pub mod message_attributes;
pub mod notification;
pub mod platform_payload;
pub mod sns_push_service;
pub mod utils;
