use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

// GCM caps time_to_live at four weeks, in seconds.
pub const GCM_TIME_TO_LIVE_MAX: i64 = 4 * 7 * 24 * 60 * 60;

pub fn generate_gcm_payload(
    data: &Map<String, Value>,
    push_id: &str,
    time_stamp: DateTime<Utc>,
    expiration_time: Option<i64>,
) -> Value {
    let mut payload = json!({
        "priority": "normal",
        "data": {
            "data": data,
            "push_id": push_id,
            "time": time_stamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        },
    });

    if let Some(expiration_time) = expiration_time {
        let time_to_live = ((expiration_time - time_stamp.timestamp_millis()) / 1000).clamp(0, GCM_TIME_TO_LIVE_MAX);
        payload["time_to_live"] = json!(time_to_live);
    }

    payload
}
