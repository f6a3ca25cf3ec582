//! Device (bird) models
//!
//! Device payloads are large and vary by device personality, so they are
//! kept as opaque JSON rather than modelled field by field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de::lenient_opt_string;

/// Response of the device listing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Devices {
    pub devices: Value,
    pub result: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub feed: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub updated: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub updated_std: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub updated_timestamp: Option<String>,
}

impl Devices {
    /// The device entries, if `devices` is a list
    pub fn entries(&self) -> &[Value] {
        self.devices.as_array().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Node ids of every listed device
    pub fn node_ids(&self) -> Vec<&str> {
        self.entries()
            .iter()
            .filter_map(|d| d.get("id").and_then(Value::as_str))
            .collect()
    }
}

/// Response of `device/info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub device: Value,
}

/// Structured response of `device/ips`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceIps {
    pub ips: Value,
}

/// Plain-text response of `device/ips` in download mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTextIps {
    pub ips: String,
}

impl DeviceTextIps {
    /// One address per non-empty line
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.ips.lines().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// Either shape `device/ips` can produce
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeviceIpsResult {
    Structured(DeviceIps),
    Text(DeviceTextIps),
}
