use std::borrow::Cow;
use std::env;

use crate::config::SnsPushConfig;
use crate::error::SnsPushDispatcherError;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sns::config::retry::RetryConfig;
use aws_sdk_sns::config::Credentials;

#[derive(Clone)]
pub struct SnsClient {
    pub client: aws_sdk_sns::Client,
}

impl SnsClient {
    pub fn new(config: &SnsPushConfig) -> Result<SnsClient, SnsPushDispatcherError> {
        if config.access_key.is_empty() || config.secret_key.is_empty() {
            return Err(SnsPushDispatcherError::misconfiguration(
                "SNS configuration is invalid",
                "access_key and secret_key must not be empty",
            ));
        }

        let endpoint = env::var("LOCAL_ENDPOINT").ok();
        let region = env::var("LOCAL_REGION").ok().unwrap_or(config.region_or_default());

        let credentials = Credentials::new(config.access_key.clone(), config.secret_key.clone(), None, None, "sns-push-dispatcher");

        let mut builder = aws_sdk_sns::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(Cow::Owned(region)))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled());

        if let Some(url) = endpoint {
            builder = builder.endpoint_url(url);
        }

        Ok(SnsClient {
            client: aws_sdk_sns::Client::from_conf(builder.build()),
        })
    }
}
