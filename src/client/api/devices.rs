//! Device executor

use std::sync::Arc;

use crate::client::endpoints::Verb;
use crate::client::models::{
    Device, DeviceInfoQuery, DeviceIps, DeviceIpsQuery, DeviceIpsResult, DeviceTextIps, Devices,
    DevicesQuery,
};
use crate::client::request::{Executor, ExecutorConfig};
use crate::client::response::ApiResponse;
use crate::client::transport::Transport;
use crate::error::Result;

/// Device listings and per-device lookups
pub struct DeviceQueries {
    config: ExecutorConfig,
    transport: Arc<dyn Transport>,
}

impl DeviceQueries {
    pub fn new(config: ExecutorConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn all(&self, query: &DevicesQuery) -> Result<ApiResponse<Devices>> {
        self.list("devices_all", query)
    }

    /// Devices currently online.
    pub fn live(&self, query: &DevicesQuery) -> Result<ApiResponse<Devices>> {
        self.list("devices_live", query)
    }

    /// Devices currently offline.
    pub fn dead(&self, query: &DevicesQuery) -> Result<ApiResponse<Devices>> {
        self.list("devices_dead", query)
    }

    /// Devices matching `filter_str`.
    pub fn filter(&self, query: &DevicesQuery) -> Result<ApiResponse<Devices>> {
        self.list("devices_filter", query)
    }

    pub fn info(&self, query: &DeviceInfoQuery) -> Result<ApiResponse<Device>> {
        let request = self.build_request(Verb::Get, "device_info").with_query(query)?;
        self.send(request)
    }

    /// IP addresses in use by devices.
    ///
    /// With `download` set the console answers with plain text, one address
    /// per line, and the body is returned untouched.
    pub fn ips(&self, query: &DeviceIpsQuery) -> Result<ApiResponse<DeviceIpsResult>> {
        let request = self.build_request(Verb::Get, "device_ips").with_query(query)?;

        if query.download {
            let response = self.execute(&request)?;
            return Ok(response.map(|raw| DeviceIpsResult::Text(DeviceTextIps { ips: raw.text() })));
        }

        Ok(self
            .send::<DeviceIps>(request)?
            .map(DeviceIpsResult::Structured))
    }

    fn list(&self, endpoint: &str, query: &DevicesQuery) -> Result<ApiResponse<Devices>> {
        let request = self.build_request(Verb::Get, endpoint).with_query(query)?;
        self.send(request)
    }
}

impl Executor for DeviceQueries {
    fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}
