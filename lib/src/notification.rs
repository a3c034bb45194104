use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PushNotification {
    pub data: Map<String, Value>,
    #[serde(default, rename = "expirationTime")]
    pub expiration_time: Option<i64>,
}

impl PushNotification {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data, expiration_time: None }
    }

    pub fn with_expiration_time(
        self,
        expiration_time: i64,
    ) -> Self {
        Self {
            data: self.data,
            expiration_time: Some(expiration_time),
        }
    }
}
