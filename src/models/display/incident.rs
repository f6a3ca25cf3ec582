//! Incident display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_epoch_seconds, truncate_string, yes_no};
use canarytools::{Incident, IncidentDescription};

/// One incident row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct IncidentDisplay {
    #[tabled(rename = "INCIDENT")]
    pub hash_id: String,

    #[tabled(rename = "UPDATED")]
    pub updated: String,

    #[tabled(rename = "KIND")]
    pub kind: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "SENSOR")]
    pub name: String,

    #[tabled(rename = "SOURCE")]
    pub src_host: String,

    #[tabled(rename = "EVENTS")]
    pub events: i64,

    #[tabled(rename = "ACK")]
    pub acknowledged: String,
}

impl IncidentDisplay {
    /// Row for `description`, labelled with `hash_id` and an epoch-seconds time
    pub fn new(hash_id: &str, updated: &str, description: &IncidentDescription) -> Self {
        Self {
            hash_id: hash_id.to_string(),
            updated: format_epoch_seconds(updated),
            kind: if description.is_token() { "token" } else { "device" }.to_string(),
            description: truncate_string(description.description(), 40),
            name: truncate_string(description.name(), 30),
            src_host: description.src_host().to_string(),
            events: description.events_count(),
            acknowledged: yes_no(description.acknowledged()),
        }
    }
}

impl From<&Incident> for IncidentDisplay {
    fn from(incident: &Incident) -> Self {
        Self::new(
            &incident.hash_id,
            &incident.updated_time,
            &incident.description,
        )
    }
}
