//! Device display model
//!
//! Device payloads are opaque JSON, so columns are read by key and left
//! blank when absent.

use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use super::common::yes_no;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DeviceDisplay {
    #[tabled(rename = "NODE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "IP")]
    pub ip_address: String,

    #[tabled(rename = "FLOCK")]
    pub flock: String,

    #[tabled(rename = "LIVE")]
    pub live: String,
}

fn text(device: &Value, key: &str) -> String {
    match device.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

impl From<&Value> for DeviceDisplay {
    fn from(device: &Value) -> Self {
        let flock = match text(device, "flock_name") {
            name if name.is_empty() => text(device, "flock_id"),
            name => name,
        };
        Self {
            id: text(device, "id"),
            name: text(device, "name"),
            ip_address: text(device, "ip_address"),
            flock,
            live: yes_no(device.get("live").and_then(Value::as_bool).unwrap_or(false)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_device_display_reads_known_keys() {
        let display = DeviceDisplay::from(&json!({
            "id": "0003a1b2c3d4e5f6",
            "name": "bird-1",
            "ip_address": "10.0.0.5",
            "flock_id": "flock:default",
            "live": true
        }));

        assert_eq!(display.id, "0003a1b2c3d4e5f6");
        assert_eq!(display.flock, "flock:default");
        assert_eq!(display.live, "✓");
    }

    #[test]
    fn test_device_display_missing_keys_blank() {
        let display = DeviceDisplay::from(&json!({"id": 7}));
        assert_eq!(display.id, "7");
        assert_eq!(display.name, "");
        assert_eq!(display.live, "✗");
    }
}
