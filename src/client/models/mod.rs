//! Canary Console data models
//!
//! Response models are organized by resource type; request parameter
//! bundles live in [`query`].

mod auth;
mod de;
mod device;
mod flock;
pub(crate) mod incident;
pub mod query;
mod settings;

pub use auth::{AUTH_TOKEN_LENGTH, AUTH_TOKEN_PARAM, AuthToken};
pub use device::{Device, DeviceIps, DeviceIpsResult, DeviceTextIps, Devices};
pub use flock::{
    FlockNote, FlockOverview, FlockSensors, FlockSettings, FlockSummary, FlockUsers, FlocksList,
    FlocksMetadata, FlocksSummary, TokenStats,
};
pub use incident::{
    Cursor, Incident, IncidentCanaryDescription, IncidentCanaryEvent, IncidentDescription,
    IncidentTokenDescription, IncidentTokenEvent, Incidents, SingleIncident, is_token_description,
};
pub use query::{
    DEFAULT_FLOCK_ID, DeviceInfoQuery, DeviceIpsQuery, DevicesQuery, FlockNoteQuery, FlockQuery,
    FlocksFilterQuery, FlocksForQuery, IncidentActionQuery, IncidentsQuery, QueryParams,
};
pub use settings::{AuthFile, Settings, ThinkstResult};
