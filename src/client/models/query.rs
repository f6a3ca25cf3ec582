//! Request parameter bundles ("queries")
//!
//! Each query serializes to a flat string map via [`QueryParams`]. Fields
//! left as `None` are never sent: for some endpoints the console treats an
//! absent parameter differently from one carrying its default.

use serde::Serialize;
use serde_json::Value;

use crate::client::request::Params;
use crate::error::{Error, Result};

/// Flock every console starts with
pub const DEFAULT_FLOCK_ID: &str = "flock:default";

/// Conversion of a query into outgoing query parameters.
pub trait QueryParams: Serialize {
    /// Render every non-null field as a string parameter.
    ///
    /// Booleans become `true`/`false`, numbers their decimal form.
    fn to_params(&self) -> Result<Params> {
        match serde_json::to_value(self)? {
            Value::Object(fields) => Ok(fields
                .into_iter()
                .filter_map(|(key, value)| render(value).map(|value| (key, value)))
                .collect()),
            other => Err(Error::InvalidQuery(format!(
                "query must serialize to an object, got {}",
                other
            ))),
        }
    }
}

fn render(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ============================================================================
// Incidents
// ============================================================================

/// Parameters for the incident listing endpoints.
///
/// # Example
/// ```
/// use canarytools::IncidentsQuery;
///
/// let query = IncidentsQuery::new().limit(50).flock_id("flock:default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentsQuery {
    pub node_id: Option<String>,
    pub flock_id: Option<String>,
    /// Only return incidents updated after this `updated_id`
    pub incidents_since: i64,
    pub event_limit: u32,
    pub limit: u32,
    /// Opaque cursor from a previous page
    pub cursor: Option<String>,
    pub shrink: bool,
    pub tz: Option<String>,
}

impl Default for IncidentsQuery {
    fn default() -> Self {
        Self {
            node_id: None,
            flock_id: None,
            incidents_since: 0,
            event_limit: 1,
            limit: 1,
            cursor: None,
            shrink: true,
            tz: None,
        }
    }
}

impl IncidentsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_id(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    pub fn flock_id(mut self, flock_id: impl Into<String>) -> Self {
        self.flock_id = Some(flock_id.into());
        self
    }

    pub fn incidents_since(mut self, updated_id: i64) -> Self {
        self.incidents_since = updated_id;
        self
    }

    pub fn event_limit(mut self, limit: u32) -> Self {
        self.event_limit = limit;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn shrink(mut self, shrink: bool) -> Self {
        self.shrink = shrink;
        self
    }

    pub fn tz(mut self, tz: impl Into<String>) -> Self {
        self.tz = Some(tz.into());
        self
    }
}

impl QueryParams for IncidentsQuery {}

/// Identifies a single incident for fetch/acknowledge/unacknowledge/delete.
///
/// At least one of `incident` or `hash_id` is always set; construction
/// fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentActionQuery {
    incident: Option<String>,
    hash_id: Option<String>,
    extended_details: bool,
    tz: Option<String>,
}

impl IncidentActionQuery {
    /// Build from either identifier. Empty strings count as unset.
    pub fn new(incident: Option<String>, hash_id: Option<String>) -> Result<Self> {
        let incident = non_empty(incident);
        let hash_id = non_empty(hash_id);
        if incident.is_none() && hash_id.is_none() {
            return Err(Error::InvalidQuery(
                "either hash_id or incident is required".to_string(),
            ));
        }
        Ok(Self {
            incident,
            hash_id,
            extended_details: true,
            tz: None,
        })
    }

    /// Identify the incident by its key, e.g. `incident:httplogin:1586338742`
    pub fn by_incident(incident: impl Into<String>) -> Result<Self> {
        Self::new(Some(incident.into()), None)
    }

    /// Identify the incident by its hash id
    pub fn by_hash_id(hash_id: impl Into<String>) -> Result<Self> {
        Self::new(None, Some(hash_id.into()))
    }

    pub fn extended_details(mut self, extended: bool) -> Self {
        self.extended_details = extended;
        self
    }

    pub fn tz(mut self, tz: impl Into<String>) -> Self {
        self.tz = Some(tz.into());
        self
    }

    pub fn incident(&self) -> Option<&str> {
        self.incident.as_deref()
    }

    pub fn hash_id(&self) -> Option<&str> {
        self.hash_id.as_deref()
    }
}

impl QueryParams for IncidentActionQuery {}

// ============================================================================
// Devices
// ============================================================================

/// Parameters for the device listing endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DevicesQuery {
    pub tz: Option<String>,
    /// Search string for `devices/filter`
    pub filter_str: Option<String>,
}

impl DevicesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tz(mut self, tz: impl Into<String>) -> Self {
        self.tz = Some(tz.into());
        self
    }

    pub fn filter_str(mut self, filter: impl Into<String>) -> Self {
        self.filter_str = Some(filter.into());
        self
    }
}

impl QueryParams for DevicesQuery {}

/// Parameters for `device/info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfoQuery {
    pub node_id: String,
    pub settings: bool,
    pub exclude_fixed_settings: bool,
    pub tz: Option<String>,
}

impl DeviceInfoQuery {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            settings: false,
            exclude_fixed_settings: false,
            tz: None,
        }
    }

    pub fn settings(mut self, settings: bool) -> Self {
        self.settings = settings;
        self
    }

    pub fn exclude_fixed_settings(mut self, exclude: bool) -> Self {
        self.exclude_fixed_settings = exclude;
        self
    }

    pub fn tz(mut self, tz: impl Into<String>) -> Self {
        self.tz = Some(tz.into());
        self
    }
}

impl QueryParams for DeviceInfoQuery {}

/// Parameters for `device/ips`.
///
/// With `download` set the console answers with plain text, one address per
/// line, instead of JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceIpsQuery {
    pub download: bool,
    pub include_annotations: bool,
    pub flock_id: Option<String>,
    pub tz: Option<String>,
}

impl DeviceIpsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    pub fn include_annotations(mut self, include: bool) -> Self {
        self.include_annotations = include;
        self
    }

    pub fn flock_id(mut self, flock_id: impl Into<String>) -> Self {
        self.flock_id = Some(flock_id.into());
        self
    }

    pub fn tz(mut self, tz: impl Into<String>) -> Self {
        self.tz = Some(tz.into());
        self
    }
}

impl QueryParams for DeviceIpsQuery {}

// ============================================================================
// Flocks
// ============================================================================

/// Selects a single flock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlockQuery {
    pub flock_id: String,
}

impl Default for FlockQuery {
    fn default() -> Self {
        Self {
            flock_id: DEFAULT_FLOCK_ID.to_string(),
        }
    }
}

impl FlockQuery {
    pub fn new(flock_id: impl Into<String>) -> Self {
        Self {
            flock_id: flock_id.into(),
        }
    }
}

impl QueryParams for FlockQuery {}

/// Note to attach to a flock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlockNoteQuery {
    pub flock_id: String,
    pub note: String,
}

impl FlockNoteQuery {
    /// A note on the default flock
    pub fn new(note: impl Into<String>) -> Self {
        Self {
            flock_id: DEFAULT_FLOCK_ID.to_string(),
            note: note.into(),
        }
    }

    pub fn flock_id(mut self, flock_id: impl Into<String>) -> Self {
        self.flock_id = flock_id.into();
        self
    }
}

impl QueryParams for FlockNoteQuery {}

/// Search string for `flocks/filter`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlocksFilterQuery {
    pub filter_str: String,
}

impl FlocksFilterQuery {
    pub fn new(filter_str: impl Into<String>) -> Self {
        Self {
            filter_str: filter_str.into(),
        }
    }
}

impl QueryParams for FlocksFilterQuery {}

/// Lists the flocks a given user can access
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlocksForQuery {
    pub email: String,
}

impl FlocksForQuery {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl QueryParams for FlocksForQuery {}
