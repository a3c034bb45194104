use crate::error::SnsPushDispatcherError;
use crate::notification::PushNotification;
use aws_sdk_sns::types::MessageAttributeValue;
use std::collections::HashMap;

pub const WNS_TYPE_ATTRIBUTE: &str = "AWS.SNS.MOBILE.WNS.Type";
pub const WNS_CACHE_POLICY_ATTRIBUTE: &str = "AWS.SNS.MOBILE.WNS.CachePolicy";

pub struct MessageAttributeService;

impl MessageAttributeService {
    pub fn build(_notification: &PushNotification) -> Result<HashMap<String, MessageAttributeValue>, SnsPushDispatcherError> {
        Ok(HashMap::from([
            (WNS_TYPE_ATTRIBUTE.to_string(), attribute_value("wns/raw")?),
            (WNS_CACHE_POLICY_ATTRIBUTE.to_string(), attribute_value("cache")?),
        ]))
    }
}

fn attribute_value(value: &str) -> Result<MessageAttributeValue, SnsPushDispatcherError> {
    MessageAttributeValue::builder().data_type("String").string_value(value).build().map_err(|error| {
        SnsPushDispatcherError::payload(&error.to_string(), &format!("Failed to create message attribute with value={}", value))
    })
}
