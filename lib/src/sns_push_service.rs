use crate::aws::SnsClient;
use crate::config::SnsPushConfig;
use crate::delivery::DeliveryOutcome;
use crate::device::Device;
use crate::error::SnsPushDispatcherError;
use crate::message_attributes::MessageAttributeService;
use crate::notification::PushNotification;
use crate::platform_payload::PlatformPayloadService;
use aws_sdk_sns::error::ProvideErrorMetadata;
use aws_sdk_sns::types::MessageAttributeValue;
use futures::future::join_all;
use std::collections::HashMap;
use tracing::instrument;
use tracing::log::{debug, error};

pub struct SnsPushService {
    sns_client: SnsClient,
}

impl SnsPushService {
    pub fn new(config: &SnsPushConfig) -> Result<Self, SnsPushDispatcherError> {
        let sns_client = SnsClient::new(config)?;

        Ok(Self { sns_client })
    }

    #[instrument(skip_all, name = "send_to_sns")]
    pub async fn send(
        &self,
        notification: &PushNotification,
        devices: &[Device],
    ) -> Result<Vec<DeliveryOutcome>, SnsPushDispatcherError> {
        let bundle = PlatformPayloadService::build(notification)?;
        let message_attributes = MessageAttributeService::build(notification)?;

        let message =
            serde_json::to_string(&bundle).map_err(|error| SnsPushDispatcherError::payload(&error.to_string(), "Failed to serialize platform payload bundle"))?;

        let submissions = devices.iter().map(|device| self.publish_to_device(device, &message, &message_attributes));

        Ok(join_all(submissions).await)
    }

    async fn publish_to_device(
        &self,
        device: &Device,
        message: &str,
        message_attributes: &HashMap<String, MessageAttributeValue>,
    ) -> DeliveryOutcome {
        let target_arn = String::from_utf8_lossy(&device.device_token).to_string();

        let publish_result = self
            .sns_client
            .client
            .publish()
            .message(message)
            .message_structure("json")
            .target_arn(&target_arn)
            .set_message_attributes(Some(message_attributes.clone()))
            .send()
            .await;

        match publish_result {
            Ok(output) => {
                if let Some(message_id) = output.message_id() {
                    debug!("Successfully sent push to {}", message_id);
                }

                DeliveryOutcome::delivered(device, output.message_id().map(|message_id| message_id.to_string()))
            },
            Err(publish_error) => {
                let body = publish_error
                    .raw_response()
                    .map(|rr| rr.body())
                    .map(|body| {
                        if let Some(bytes) = body.bytes() {
                            String::from_utf8(bytes.to_vec()).ok().unwrap_or(String::from("Unknown: Failed to convert bytes to string"))
                        } else {
                            String::from("Unknown: None bytes")
                        }
                    })
                    .unwrap_or(String::from("Unknown"));

                let detail = format!("{} - Cause: {}", publish_error.message().unwrap_or("Failed to publish push notification"), body);
                error!("Error sending push to {}: {}", target_arn, detail);

                DeliveryOutcome::failed(device, &detail)
            },
        }
    }
}
