//! Flock executor

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::client::endpoints::Verb;
use crate::client::models::{
    FlockNote, FlockNoteQuery, FlockQuery, FlockSensors, FlockSettings, FlockSummary, FlockUsers,
    FlocksFilterQuery, FlocksForQuery, FlocksList, FlocksMetadata, FlocksSummary, QueryParams,
    ThinkstResult,
};
use crate::client::request::{Executor, ExecutorConfig};
use crate::client::response::ApiResponse;
use crate::client::transport::Transport;
use crate::error::Result;

/// Flock summaries, membership, settings and notes
pub struct FlockQueries {
    config: ExecutorConfig,
    transport: Arc<dyn Transport>,
}

impl FlockQueries {
    pub fn new(config: ExecutorConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Summary of every flock, keyed by flock id.
    pub fn summaries(&self) -> Result<ApiResponse<FlocksSummary>> {
        let request = self.build_request(Verb::Get, "flocks_summary");
        self.send(request)
    }

    /// Token and incident counts for one flock.
    pub fn summary(&self, query: &FlockQuery) -> Result<ApiResponse<FlockSummary>> {
        self.get("flock_summary", query)
    }

    /// Sensors (devices and tokens) in one flock.
    pub fn list_all(&self, query: &FlockQuery) -> Result<ApiResponse<FlockSensors>> {
        self.get("flock_list", query)
    }

    pub fn settings(&self, query: &FlockQuery) -> Result<ApiResponse<FlockSettings>> {
        self.get("flock_settings", query)
    }

    /// Users with access to one flock.
    pub fn users(&self, query: &FlockQuery) -> Result<ApiResponse<FlockUsers>> {
        self.get("flock_users", query)
    }

    /// Flock metadata matching a search string.
    pub fn filter(&self, query: &FlocksFilterQuery) -> Result<ApiResponse<FlocksMetadata>> {
        self.get("flocks_filter", query)
    }

    /// Flocks a user can access.
    pub fn list_for(&self, query: &FlocksForQuery) -> Result<ApiResponse<FlocksList>> {
        self.get("flocks_list", query)
    }

    pub fn get_note(&self, query: &FlockQuery) -> Result<ApiResponse<FlockNote>> {
        self.get("flock_note", query)
    }

    /// Attach a note to a flock, replacing any existing one.
    pub fn add_note(&self, query: &FlockNoteQuery) -> Result<ApiResponse<ThinkstResult>> {
        let request = self
            .build_request(Verb::Post, "flock_note")
            .with_query(query)?;
        self.send(request)
    }

    pub fn delete_note(&self, query: &FlockQuery) -> Result<ApiResponse<ThinkstResult>> {
        let request = self
            .build_request(Verb::Delete, "flock_note")
            .with_query(query)?;
        self.send(request)
    }

    fn get<Q: QueryParams, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &Q,
    ) -> Result<ApiResponse<T>> {
        let request = self.build_request(Verb::Get, endpoint).with_query(query)?;
        self.send(request)
    }
}

impl Executor for FlockQueries {
    fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}
