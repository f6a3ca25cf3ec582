//! Settings display model

use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use canarytools::client::models::AUTH_TOKEN_PARAM;
use canarytools::{Result, Settings};

const REDACTED: &str = "**********";

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SettingDisplay {
    #[tabled(rename = "SETTING")]
    pub name: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl SettingDisplay {
    /// The settings as JSON with the API token masked.
    pub fn redacted(settings: &Settings) -> Result<Value> {
        let mut value = serde_json::to_value(settings)?;
        if let Some(token) = value.get_mut(AUTH_TOKEN_PARAM) {
            *token = Value::String(REDACTED.to_string());
        }
        Ok(value)
    }

    /// One row per setting, in field-name order. The token stays redacted.
    pub fn rows(settings: &Settings) -> Result<Vec<Self>> {
        let Value::Object(fields) = Self::redacted(settings)? else {
            return Ok(Vec::new());
        };

        Ok(fields
            .into_iter()
            .map(|(name, value)| Self {
                name,
                value: match value {
                    Value::String(s) => s,
                    Value::Array(items) if items.is_empty() => "-".to_string(),
                    other => other.to_string(),
                },
            })
            .collect())
    }
}
