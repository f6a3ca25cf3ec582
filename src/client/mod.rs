//! Canary Console API client
//!
//! Layers, bottom up:
//! - [`endpoints`] - `(verb, name)` to path table
//! - [`request`] - request building and the [`Executor`] trait
//! - [`transport`] - one HTTP round trip, classified into success or [`ApiError`](crate::ApiError)
//! - [`response`] - validation of the body against a model
//! - [`api`] - resource executors
//! - [`console`] - the [`Console`] facade

pub mod api;
pub mod console;
pub mod endpoints;
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod request;
pub mod response;
pub mod transport;

pub use api::{Api, ConsoleSettings, DeviceQueries, FlockQueries, IncidentActions, IncidentQueries};
pub use console::{Console, ConsoleBuilder};
pub use endpoints::{EndpointTable, Verb};
pub use fixtures::{FixtureMode, RecordingTransport, ReplayTransport, request_key};
pub use request::{Executor, ExecutorConfig, Params, Request};
pub use response::{ApiResponse, check_response};
pub use transport::{HttpTransport, RawResponse, Transport};
