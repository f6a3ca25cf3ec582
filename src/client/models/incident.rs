//! Incident models
//!
//! An incident is raised either by a Canary device or by a Canarytoken, and
//! the two carry differently shaped descriptions. [`IncidentDescription`]
//! resolves which one it is with a single rule, see
//! [`is_token_description`].

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::de::{events_list, lenient_bool, lenient_i64, lenient_opt_string, lenient_string};

/// Paging cursor attached to incident listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub next_link: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub prev_link: Option<String>,
}

/// One event on a device-originated incident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentCanaryEvent {
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: i64,
    pub timestamp_std: String,
}

/// One event on a token-originated incident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentTokenEvent {
    pub canarytoken: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub dst_port: i64,
    pub hostname: String,
    pub src_host: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: i64,
    pub timestamp_std: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Description of an incident raised by a Canary device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentCanaryDescription {
    #[serde(deserialize_with = "lenient_bool")]
    pub acknowledged: bool,
    #[serde(deserialize_with = "lenient_i64")]
    pub created: i64,
    pub created_std: String,
    pub description: String,
    pub dst_host: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub dst_port: i64,
    pub events: Vec<IncidentCanaryEvent>,
    #[serde(deserialize_with = "lenient_i64")]
    pub events_count: i64,
    #[serde(deserialize_with = "events_list")]
    pub events_list: Vec<i64>,
    pub flock_id: String,
    pub flock_name: String,
    pub ip_address: String,
    pub ippers: String,
    pub local_time: String,
    #[serde(deserialize_with = "lenient_string")]
    pub logtype: String,
    pub mac_address: String,
    pub matched_annotations: Map<String, Value>,
    pub name: String,
    pub node_id: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub notified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor: Option<String>,
    pub src_host: String,
    pub src_host_reverse: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub src_port: i64,
}

/// Description of an incident raised by a Canarytoken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentTokenDescription {
    #[serde(deserialize_with = "lenient_bool")]
    pub acknowledged: bool,
    #[serde(deserialize_with = "lenient_i64")]
    pub created: i64,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub created_std: Option<String>,
    pub description: String,
    pub dst_host: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub dst_port: i64,
    #[serde(default)]
    pub events: Option<Vec<IncidentTokenEvent>>,
    #[serde(deserialize_with = "lenient_i64")]
    pub events_count: i64,
    pub flock_id: String,
    #[serde(default)]
    pub flock_name: Option<String>,
    pub local_time: String,
    #[serde(deserialize_with = "lenient_string")]
    pub logtype: String,
    pub matched_annotations: Map<String, Value>,
    pub name: String,
    pub node_id: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub notified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor: Option<String>,
    pub src_host: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub src_port: i64,
}

/// Device- or token-originated incident description
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IncidentDescription {
    Canary(Box<IncidentCanaryDescription>),
    Token(Box<IncidentTokenDescription>),
}

/// Discriminator between the two description shapes.
///
/// A description is token-originated when its `sensor` is `"canarytoken"`
/// or when its first event carries a `canarytoken` key. Everything else is
/// treated as device-originated.
pub fn is_token_description(value: &Value) -> bool {
    if value.get("sensor").and_then(Value::as_str) == Some("canarytoken") {
        return true;
    }
    value
        .get("events")
        .and_then(Value::as_array)
        .and_then(|events| events.first())
        .and_then(Value::as_object)
        .is_some_and(|event| event.contains_key("canarytoken"))
}

impl IncidentDescription {
    pub fn is_token(&self) -> bool {
        matches!(self, IncidentDescription::Token(_))
    }

    pub fn description(&self) -> &str {
        match self {
            IncidentDescription::Canary(d) => &d.description,
            IncidentDescription::Token(d) => &d.description,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            IncidentDescription::Canary(d) => &d.name,
            IncidentDescription::Token(d) => &d.name,
        }
    }

    pub fn src_host(&self) -> &str {
        match self {
            IncidentDescription::Canary(d) => &d.src_host,
            IncidentDescription::Token(d) => &d.src_host,
        }
    }

    pub fn acknowledged(&self) -> bool {
        match self {
            IncidentDescription::Canary(d) => d.acknowledged,
            IncidentDescription::Token(d) => d.acknowledged,
        }
    }

    /// Creation time, epoch seconds
    pub fn created(&self) -> i64 {
        match self {
            IncidentDescription::Canary(d) => d.created,
            IncidentDescription::Token(d) => d.created,
        }
    }

    pub fn events_count(&self) -> i64 {
        match self {
            IncidentDescription::Canary(d) => d.events_count,
            IncidentDescription::Token(d) => d.events_count,
        }
    }
}

impl<'de> Deserialize<'de> for IncidentDescription {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if is_token_description(&value) {
            serde_json::from_value(value)
                .map(|d| IncidentDescription::Token(Box::new(d)))
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(|d| IncidentDescription::Canary(Box::new(d)))
                .map_err(D::Error::custom)
        }
    }
}

/// One entry of an incident listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub hash_id: String,
    pub id: String,
    pub summary: String,
    pub updated: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub updated_id: i64,
    pub updated_std: String,
    #[serde(deserialize_with = "lenient_string")]
    pub updated_time: String,
    pub description: IncidentDescription,
}

/// Response of the incident listing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incidents {
    pub cursor: Cursor,
    pub feed: String,
    pub incidents: Vec<Incident>,
}

/// Response of `incident/fetch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleIncident {
    pub incident: IncidentDescription,
}
