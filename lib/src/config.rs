use serde::{Deserialize, Serialize};

pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SnsPushConfig {
    pub access_key: String,
    pub secret_key: String,
    pub region: Option<String>,
}

impl SnsPushConfig {
    pub fn new(
        access_key: &str,
        secret_key: &str,
    ) -> Self {
        Self {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            region: None,
        }
    }

    pub fn with_region(
        self,
        region: &str,
    ) -> Self {
        Self {
            access_key: self.access_key,
            secret_key: self.secret_key,
            region: Some(region.to_string()),
        }
    }

    pub fn region_or_default(&self) -> String {
        self.region.clone().unwrap_or(DEFAULT_REGION.to_string())
    }
}
