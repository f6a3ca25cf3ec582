//! Typed client for the Thinkst Canary Console API
//!
//! Build a [`Console`] from a console hash and API key, then call the
//! resource executors hanging off it. Every call returns
//! `Result<ApiResponse<Model>>`: an [`ApiResponse::Failure`] is the console
//! refusing the request (any non-2xx), while `Err` is reserved for local
//! problems and for responses the client no longer understands.

pub mod client;
pub mod config;
pub mod error;

pub use client::models::{
    AuthFile, AuthToken, Device, DeviceInfoQuery, DeviceIps, DeviceIpsQuery, DeviceIpsResult,
    DeviceTextIps, Devices, DevicesQuery, FlockNote, FlockNoteQuery, FlockOverview, FlockQuery,
    FlockSensors, FlockSettings, FlockSummary, FlockUsers, FlocksFilterQuery, FlocksForQuery,
    FlocksList, FlocksMetadata, FlocksSummary, Incident, IncidentActionQuery, IncidentDescription,
    Incidents, IncidentsQuery, Settings, SingleIncident, ThinkstResult,
};
pub use client::{ApiResponse, Console, ConsoleBuilder, HttpTransport, Transport};
pub use config::Config;
pub use error::{ApiError, ConfigError, Error, Result};
