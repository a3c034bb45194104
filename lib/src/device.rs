#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub device_type: String,
    pub device_token: Vec<u8>,
}

impl Device {
    pub fn new(
        device_type: &str,
        device_token: &[u8],
    ) -> Self {
        Self {
            device_type: device_type.to_string(),
            device_token: device_token.to_vec(),
        }
    }
}
