//! Request construction shared by every executor

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::endpoints::{API_VERSION, EndpointTable, Verb};
use super::models::{AuthToken, QueryParams};
use super::response::{ApiResponse, check_response};
use super::transport::{RawResponse, Transport};
use crate::error::Result;

/// Flat query parameters, ordered by key
pub type Params = BTreeMap<String, String>;

/// A fully formed request: verb, absolute URL, and query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub verb: Verb,
    pub url: String,
    pub params: Params,
}

impl Request {
    /// Merge a query's non-null fields into the parameters.
    pub fn with_query<Q: QueryParams>(mut self, query: &Q) -> Result<Self> {
        self.params.extend(query.to_params()?);
        Ok(self)
    }

    /// Drop a parameter the endpoint rejects.
    pub fn without_param(mut self, name: &str) -> Self {
        self.params.remove(name);
        self
    }
}

/// Per-resource-group configuration, created once by the console facade.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    pub auth_token: AuthToken,
    /// Console base URL, without the `/api/...` suffix
    pub base_url: String,
    pub api_version: String,
    pub endpoints: Arc<EndpointTable>,
}

impl ExecutorConfig {
    /// Configuration with the default API version and endpoint table
    pub fn new(auth_token: AuthToken, base_url: impl Into<String>) -> Self {
        Self {
            auth_token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_version: API_VERSION.to_string(),
            endpoints: Arc::new(EndpointTable::default()),
        }
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_endpoints(mut self, endpoints: Arc<EndpointTable>) -> Self {
        self.endpoints = endpoints;
        self
    }
}

/// Build the request for `(verb, endpoint_name)`.
///
/// Pure formatting: `url = base_url + /api/{version} + path` and the only
/// parameter is the auth token. Callers merge query fields afterwards.
///
/// # Panics
/// Panics if the endpoint is not in the configuration's table.
pub fn build_request(config: &ExecutorConfig, verb: Verb, endpoint_name: &str) -> Request {
    let path = config.endpoints.path(verb, endpoint_name);
    Request {
        verb,
        url: format!("{}/api/{}{}", config.base_url, config.api_version, path),
        params: config.auth_token.secret_dict(),
    }
}

/// Capabilities every resource executor provides.
///
/// Executors hold a configuration and a transport by composition; the
/// provided methods are shared.
pub trait Executor {
    fn config(&self) -> &ExecutorConfig;

    fn transport(&self) -> &dyn Transport;

    fn build_request(&self, verb: Verb, endpoint_name: &str) -> Request {
        build_request(self.config(), verb, endpoint_name)
    }

    fn execute(&self, request: &Request) -> Result<ApiResponse<RawResponse>> {
        log::debug!("{} {}", request.verb, request.url);
        self.transport().execute(request)
    }

    /// Execute and validate against model `T`.
    fn send<T: DeserializeOwned>(&self, request: Request) -> Result<ApiResponse<T>> {
        check_response(self.execute(&request)?)
    }
}
