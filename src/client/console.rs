//! Console facade: the single entry point to a Canary Console

use std::sync::Arc;
use std::time::Duration;

use super::api::{
    Api, ConsoleSettings, DeviceQueries, FlockQueries, IncidentActions, IncidentQueries,
};
use super::endpoints::{API_VERSION, EndpointTable, console_base_url};
use super::models::AuthToken;
use super::request::ExecutorConfig;
use super::transport::{HttpTransport, Transport};
use crate::error::{Error, Result};

/// Every resource executor for one console, sharing one token and transport.
///
/// # Example
/// ```no_run
/// use canarytools::{Console, IncidentsQuery};
///
/// let console = Console::new("1234abcd", "0123456789abcdef0123456789abcdef")?;
/// match console.incidents.unacknowledged(&IncidentsQuery::new().limit(10))? {
///     canarytools::ApiResponse::Success(page) => println!("{}", page.incidents.len()),
///     canarytools::ApiResponse::Failure(err) => eprintln!("{err}"),
/// }
/// # Ok::<(), canarytools::Error>(())
/// ```
pub struct Console {
    pub settings: ConsoleSettings,
    pub api: Api,
    pub incidents: IncidentQueries,
    pub incident_actions: IncidentActions,
    pub devices: DeviceQueries,
    pub flocks: FlockQueries,
    base_url: String,
}

impl Console {
    /// Console at `https://{console_hash}.canary.tools` over HTTPS.
    ///
    /// Fails if `api_key` is not a valid 32 character token.
    pub fn new(console_hash: &str, api_key: impl Into<String>) -> Result<Self> {
        Console::builder()
            .console_hash(console_hash)
            .api_key(api_key)
            .build()
    }

    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    /// Base URL every executor targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Builder for [`Console`], for custom hosts, transports and timeouts.
#[derive(Default)]
pub struct ConsoleBuilder {
    api_key: Option<String>,
    console_hash: Option<String>,
    base_url: Option<String>,
    api_version: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
    endpoints: Option<Arc<EndpointTable>>,
}

impl ConsoleBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Tenant hash; the base URL becomes `https://{hash}.canary.tools`.
    pub fn console_hash(mut self, console_hash: impl Into<String>) -> Self {
        self.console_hash = Some(console_hash.into());
        self
    }

    /// Full base URL, e.g. for an on-prem console. Wins over the hash.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Per-request timeout for the default HTTP transport.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the HTTP transport, e.g. with a fixture replay.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn endpoints(mut self, endpoints: EndpointTable) -> Self {
        self.endpoints = Some(Arc::new(endpoints));
        self
    }

    pub fn build(self) -> Result<Console> {
        // A missing key fails the same length check as an empty one
        let auth_token = AuthToken::new(self.api_key.unwrap_or_default())?;

        let base_url = match (self.base_url, self.console_hash) {
            (Some(url), _) => url,
            (None, Some(hash)) => console_base_url(&hash),
            (None, None) => {
                return Err(Error::InvalidQuery(
                    "either a console hash or a base URL is required".to_string(),
                ));
            }
        };

        let transport: Arc<dyn Transport> = match (self.transport, self.timeout) {
            (Some(transport), _) => transport,
            (None, Some(timeout)) => Arc::new(HttpTransport::with_timeout(timeout)),
            (None, None) => Arc::new(HttpTransport::new()),
        };

        let config = ExecutorConfig::new(auth_token, base_url)
            .with_api_version(self.api_version.unwrap_or_else(|| API_VERSION.to_string()))
            .with_endpoints(self.endpoints.unwrap_or_default());

        log::debug!("Console configured for {}", config.base_url);

        Ok(Console {
            settings: ConsoleSettings::new(config.clone(), Arc::clone(&transport)),
            api: Api::new(config.clone(), Arc::clone(&transport)),
            incidents: IncidentQueries::new(config.clone(), Arc::clone(&transport)),
            incident_actions: IncidentActions::new(config.clone(), Arc::clone(&transport)),
            devices: DeviceQueries::new(config.clone(), Arc::clone(&transport)),
            flocks: FlockQueries::new(config.clone(), transport),
            base_url: config.base_url,
        })
    }
}
