//! Display model implementations for table and JSON output
//!
//! Display models turn console responses into CLI-friendly rows.

mod common;
mod device;
mod flock;
mod incident;
mod settings;

pub use device::DeviceDisplay;
pub use flock::{FlockMetricDisplay, FlockOverviewDisplay};
pub use incident::IncidentDisplay;
pub use settings::SettingDisplay;
