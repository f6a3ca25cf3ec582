//! Incident executors: listing queries and single-incident actions

use std::sync::Arc;

use crate::client::endpoints::Verb;
use crate::client::models::{
    IncidentActionQuery, Incidents, IncidentsQuery, SingleIncident, ThinkstResult,
};
use crate::client::request::{Executor, ExecutorConfig};
use crate::client::response::ApiResponse;
use crate::client::transport::Transport;
use crate::error::Result;

/// Incident listings
pub struct IncidentQueries {
    config: ExecutorConfig,
    transport: Arc<dyn Transport>,
}

impl IncidentQueries {
    pub fn new(config: ExecutorConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Acknowledged incidents.
    pub fn acknowledged(&self, query: &IncidentsQuery) -> Result<ApiResponse<Incidents>> {
        self.list("incident_acknowledged", query)
    }

    /// Unacknowledged incidents.
    ///
    /// The console rejects `incidents_since` on this endpoint, so it is
    /// dropped even when the query sets it.
    pub fn unacknowledged(&self, query: &IncidentsQuery) -> Result<ApiResponse<Incidents>> {
        let request = self
            .build_request(Verb::Get, "incident_unacknowledged")
            .with_query(query)?
            .without_param("incidents_since");
        self.send(request)
    }

    /// Every incident, acknowledged or not.
    pub fn all(&self, query: &IncidentsQuery) -> Result<ApiResponse<Incidents>> {
        self.list("incident_all", query)
    }

    fn list(&self, endpoint: &str, query: &IncidentsQuery) -> Result<ApiResponse<Incidents>> {
        let request = self.build_request(Verb::Get, endpoint).with_query(query)?;
        self.send(request)
    }
}

impl Executor for IncidentQueries {
    fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

/// Actions on a single incident, identified by id or hash id
pub struct IncidentActions {
    config: ExecutorConfig,
    transport: Arc<dyn Transport>,
}

impl IncidentActions {
    pub fn new(config: ExecutorConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Fetch one incident with its description.
    pub fn fetch(&self, query: &IncidentActionQuery) -> Result<ApiResponse<SingleIncident>> {
        let request = self
            .build_request(Verb::Get, "incident_fetch")
            .with_query(query)?;
        self.send(request)
    }

    pub fn acknowledge(&self, query: &IncidentActionQuery) -> Result<ApiResponse<ThinkstResult>> {
        self.act(Verb::Post, "incident_acknowledge", query)
    }

    pub fn unacknowledge(
        &self,
        query: &IncidentActionQuery,
    ) -> Result<ApiResponse<ThinkstResult>> {
        self.act(Verb::Post, "incident_unacknowledge", query)
    }

    /// Delete the incident. Irreversible.
    pub fn delete(&self, query: &IncidentActionQuery) -> Result<ApiResponse<ThinkstResult>> {
        self.act(Verb::Delete, "incident_delete", query)
    }

    fn act(
        &self,
        verb: Verb,
        endpoint: &str,
        query: &IncidentActionQuery,
    ) -> Result<ApiResponse<ThinkstResult>> {
        let request = self.build_request(verb, endpoint).with_query(query)?;
        self.send(request)
    }
}

impl Executor for IncidentActions {
    fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}
