//! API access executor: enable/disable the API and download the token file

use std::sync::Arc;

use crate::client::endpoints::Verb;
use crate::client::models::{AuthFile, ThinkstResult};
use crate::client::request::{Executor, ExecutorConfig};
use crate::client::response::ApiResponse;
use crate::client::transport::Transport;
use crate::error::Result;

/// Controls API access on the console
pub struct Api {
    config: ExecutorConfig,
    transport: Arc<dyn Transport>,
}

impl Api {
    pub fn new(config: ExecutorConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Enable the console API.
    pub fn enable(&self) -> Result<ApiResponse<ThinkstResult>> {
        let request = self.build_request(Verb::Post, "settings_api_enable");
        self.send(request)
    }

    /// Disable the console API. Every token stops working, including this one.
    pub fn disable(&self) -> Result<ApiResponse<ThinkstResult>> {
        let request = self.build_request(Verb::Post, "settings_api_disable");
        self.send(request)
    }

    /// Download the API token file.
    ///
    /// The console serves a file, not JSON, so the body is returned as raw
    /// bytes without validation.
    pub fn auth_token_download(&self) -> Result<ApiResponse<AuthFile>> {
        let request = self.build_request(Verb::Get, "settings_api_auth_token_download");
        Ok(self
            .execute(&request)?
            .map(|raw| AuthFile::new(raw.body)))
    }
}

impl Executor for Api {
    fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}
