use crate::device::Device;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeliveredDevice {
    pub device_type: String,
    pub device_token: String,
}

impl From<&Device> for DeliveredDevice {
    fn from(device: &Device) -> Self {
        Self {
            device_type: device.device_type.clone(),
            device_token: hex::encode(&device.device_token),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryResponse {
    Delivered { message_id: Option<String> },
    Failed { error: String },
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    pub device: DeliveredDevice,
    pub transmitted: bool,
    pub response: DeliveryResponse,
}

impl DeliveryOutcome {
    pub fn delivered(
        device: &Device,
        message_id: Option<String>,
    ) -> Self {
        Self {
            device: DeliveredDevice::from(device),
            transmitted: true,
            response: DeliveryResponse::Delivered { message_id },
        }
    }

    pub fn failed(
        device: &Device,
        error: &str,
    ) -> Self {
        Self {
            device: DeliveredDevice::from(device),
            transmitted: false,
            response: DeliveryResponse::Failed { error: error.to_string() },
        }
    }
}
