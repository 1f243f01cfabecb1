//! Output Rendering
//!
//! JSON output is one event object per command on stdout. Object payloads
//! are flattened into the event; anything else goes under `data`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Wrap `payload` in an event object tagged with `event`
pub fn event(event: &str, payload: &impl Serialize) -> serde_json::Result<Value> {
    let mut object = Map::new();
    object.insert("event".to_string(), Value::String(event.to_string()));

    match serde_json::to_value(payload)? {
        Value::Object(fields) => object.extend(fields),
        Value::Null => {}
        other => {
            object.insert("data".to_string(), other);
        }
    }

    Ok(Value::Object(object))
}

/// Error event written when a command fails in JSON mode
pub fn error_event(message: &str) -> Value {
    serde_json::json!({
        "event": "error",
        "message": message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Counts {
        synced: usize,
        failed: usize,
    }

    #[test]
    fn object_payload_is_flattened() {
        let value = event("sync", &Counts { synced: 2, failed: 0 }).unwrap();
        assert_eq!(value, json!({"event": "sync", "synced": 2, "failed": 0}));
    }

    #[test]
    fn list_payload_goes_under_data() {
        let value = event("plants", &vec!["PLT-001"]).unwrap();
        assert_eq!(value, json!({"event": "plants", "data": ["PLT-001"]}));
    }

    #[test]
    fn unit_payload_is_just_the_event() {
        let value = event("logout", &()).unwrap();
        assert_eq!(value, json!({"event": "logout"}));
    }
}
