use crate::apns::generate_apns_payload;
use crate::error::SnsPushDispatcherError;
use crate::gcm::generate_gcm_payload;
use crate::notification::PushNotification;
use crate::utils::random_string;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

pub const GCM_PUSH_ID_SIZE: usize = 10;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PlatformPayloadBundle {
    #[serde(rename = "GCM")]
    pub gcm: String,
    #[serde(rename = "APNS")]
    pub apns: String,
    #[serde(rename = "APNS_SANDBOX")]
    pub apns_sandbox: String,
    #[serde(rename = "ADM")]
    pub adm: String,
    #[serde(rename = "WNS")]
    pub wns: String,
    #[serde(rename = "default")]
    pub default: String,
}

pub struct PlatformPayloadService;

impl PlatformPayloadService {
    pub fn build(notification: &PushNotification) -> Result<PlatformPayloadBundle, SnsPushDispatcherError> {
        let gcm_payload = generate_gcm_payload(&notification.data, &random_string(GCM_PUSH_ID_SIZE), Utc::now(), notification.expiration_time);
        let apns_payload = generate_apns_payload(&notification.data, notification.expiration_time);
        let adm_payload = json!({ "data": notification.data });
        let raw_payload = Value::Object(notification.data.clone());

        let apns = serialize(&apns_payload)?;
        let raw = serialize(&raw_payload)?;

        Ok(PlatformPayloadBundle {
            gcm: serialize(&gcm_payload)?,
            apns: apns.clone(),
            apns_sandbox: apns,
            adm: serialize(&adm_payload)?,
            wns: raw.clone(),
            default: raw,
        })
    }
}

fn serialize(payload: &Value) -> Result<String, SnsPushDispatcherError> {
    serde_json::to_string(payload).map_err(|error| SnsPushDispatcherError::payload(&error.to_string(), "Failed to serialize platform payload"))
}
