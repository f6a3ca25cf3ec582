//! Flock models
//!
//! Only the summary, sensor list and note endpoints have a settled shape.
//! The rest keep their payload as opaque JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::de::lenient_i64;

/// Per-kind token counts in a flock summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStats {
    #[serde(deserialize_with = "lenient_i64")]
    pub count: i64,
    pub kind: String,
}

/// Response of `flock/summary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlockSummary {
    pub result: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub different_token_num: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub disabled_tokens: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub incident_count: i64,
    pub top_tokens: Vec<TokenStats>,
    #[serde(deserialize_with = "lenient_i64")]
    pub total_tokens: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub triggered_tokens: i64,
}

/// Response of `flocks/summary`: flock id -> summary object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlocksSummary {
    pub flocks_summary: Map<String, Value>,
}

/// Headline numbers for one flock, pulled out of [`FlocksSummary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlockOverview {
    pub flock_id: String,
    pub name: String,
    pub online_devices: i64,
    pub offline_devices: i64,
    pub enabled_tokens: i64,
    pub disabled_tokens: i64,
}

impl FlocksSummary {
    /// Flock ids, sorted
    pub fn flock_ids(&self) -> Vec<&str> {
        self.flocks_summary.keys().map(String::as_str).collect()
    }

    /// Headline numbers per flock; missing counters read as zero.
    pub fn overview(&self) -> Vec<FlockOverview> {
        fn count(summary: &Value, key: &str) -> i64 {
            match summary.get(key) {
                Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
                Some(Value::String(s)) => s.parse().unwrap_or(0),
                _ => 0,
            }
        }

        self.flocks_summary
            .iter()
            .map(|(flock_id, summary)| FlockOverview {
                flock_id: flock_id.clone(),
                name: summary
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or(flock_id)
                    .to_string(),
                online_devices: count(summary, "online_devices"),
                offline_devices: count(summary, "offline_devices"),
                enabled_tokens: count(summary, "enabled_tokens"),
                disabled_tokens: count(summary, "disabled_tokens"),
            })
            .collect()
    }
}

/// Response of `flock/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlockSensors {
    pub result: String,
    pub sensors: Vec<String>,
}

/// Response of `flock/settings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlockSettings {
    pub settings: Value,
}

/// Response of `flock/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlockUsers {
    pub result: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Response of `flocks/filter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlocksMetadata {
    pub result: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Response of `flocks/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlocksList {
    pub result: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Response of `flock/note`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlockNote {
    pub result: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flock_summary_parse() {
        let summary: FlockSummary = serde_json::from_value(json!({
            "result": "success",
            "different_token_num": 2,
            "disabled_tokens": 0,
            "incident_count": "5",
            "top_tokens": [{"count": 3, "kind": "dns"}, {"count": 1, "kind": "http"}],
            "total_tokens": 4,
            "triggered_tokens": 1
        }))
        .unwrap();

        assert_eq!(summary.incident_count, 5);
        assert_eq!(summary.top_tokens[0].kind, "dns");
    }

    #[test]
    fn test_flocks_summary_overview() {
        let summary: FlocksSummary = serde_json::from_value(json!({
            "flocks_summary": {
                "flock:default": {
                    "name": "Default Flock",
                    "online_devices": 3,
                    "offline_devices": "1",
                    "enabled_tokens": 7,
                    "disabled_tokens": 2
                },
                "flock:abc": {}
            }
        }))
        .unwrap();

        let overview = summary.overview();
        assert_eq!(overview.len(), 2);

        let default = overview
            .iter()
            .find(|o| o.flock_id == "flock:default")
            .unwrap();
        assert_eq!(default.name, "Default Flock");
        assert_eq!(default.offline_devices, 1);
        assert_eq!(default.enabled_tokens, 7);

        let bare = overview.iter().find(|o| o.flock_id == "flock:abc").unwrap();
        assert_eq!(bare.name, "flock:abc");
        assert_eq!(bare.online_devices, 0);
    }

    #[test]
    fn test_flock_users_keeps_payload() {
        let users: FlockUsers = serde_json::from_value(json!({
            "result": "success",
            "users": [{"email": "analyst@example.com"}]
        }))
        .unwrap();

        assert_eq!(users.result, "success");
        assert!(users.payload.contains_key("users"));
        assert!(!users.payload.contains_key("result"));
    }

    #[test]
    fn test_flock_note_optional() {
        let note: FlockNote = serde_json::from_value(json!({"result": "success"})).unwrap();
        assert!(note.note.is_none());
    }
}
