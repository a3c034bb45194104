use serde_json::{json, Map, Value};

const APS_KEYS: [&str; 6] = ["alert", "badge", "sound", "content-available", "mutable-content", "category"];

pub fn generate_apns_payload(
    data: &Map<String, Value>,
    expiration_time: Option<i64>,
) -> Value {
    let mut aps = Map::new();
    let mut payload = Map::new();

    for (key, value) in data {
        if APS_KEYS.contains(&key.as_str()) {
            aps.insert(key.clone(), value.clone());
        } else {
            payload.insert(key.clone(), value.clone());
        }
    }

    payload.insert("aps".to_string(), Value::Object(aps));

    if let Some(expiration_time) = expiration_time {
        payload.insert("expiration_time".to_string(), json!(expiration_time));
    }

    Value::Object(payload)
}
