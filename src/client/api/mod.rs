//! Resource executors, one per console resource group
//!
//! Every executor owns an [`ExecutorConfig`](super::ExecutorConfig) and a
//! shared [`Transport`](super::Transport), and gets request building,
//! execution and validation from [`Executor`](super::Executor):
//! - [`ConsoleSettings`] - console settings
//! - [`Api`] - API toggle and token file download
//! - [`IncidentQueries`] / [`IncidentActions`] - incident listings and actions
//! - [`DeviceQueries`] - devices
//! - [`FlockQueries`] - flocks and flock notes

mod api_access;
mod devices;
mod flocks;
mod incidents;
mod settings;

pub use api_access::Api;
pub use devices::DeviceQueries;
pub use flocks::FlockQueries;
pub use incidents::{IncidentActions, IncidentQueries};
pub use settings::ConsoleSettings;
