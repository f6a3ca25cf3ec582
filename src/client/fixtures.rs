//! Offline fixtures: record live responses and replay them later
//!
//! Both transports plug into the [`Transport`] seam, so executors and the
//! validator run unchanged against recorded data. Each response is stored
//! as `<dir>/<key>.json`, where the key is [`request_key`].

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::models::AUTH_TOKEN_PARAM;
use super::request::Request;
use super::response::ApiResponse;
use super::transport::{HttpTransport, RawResponse, Transport};
use crate::error::{ApiError, Error, Result};

/// Deterministic key for a request.
///
/// SHA-256 over the verb, the URL after its last `.` (so the console hash
/// does not matter) and the sorted parameters. The auth token is left out so
/// recordings replay under any token.
pub fn request_key(request: &Request) -> String {
    let mut hasher = Sha256::new();

    hasher.update(request.verb.as_str().as_bytes());
    hasher.update(b"|");

    let suffix = request.url.rsplit('.').next().unwrap_or(&request.url);
    hasher.update(suffix.as_bytes());
    hasher.update(b"|");

    // Params is a BTreeMap, already sorted
    for (k, v) in request.params.iter().filter(|(k, _)| *k != AUTH_TOKEN_PARAM) {
        hasher.update(k.as_bytes());
        hasher.update(b"=");
        hasher.update(v.as_bytes());
        hasher.update(b"&");
    }

    format!("{:x}", hasher.finalize())
}

/// On-disk form of one transport outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
enum Recorded {
    Success {
        status: u16,
        content_type: Option<String>,
        /// Base64, since bodies are not always UTF-8
        body: String,
        url: String,
    },
    Failure(ApiError),
}

impl From<&ApiResponse<RawResponse>> for Recorded {
    fn from(response: &ApiResponse<RawResponse>) -> Self {
        match response {
            ApiResponse::Success(raw) => Recorded::Success {
                status: raw.status,
                content_type: raw.content_type.clone(),
                body: general_purpose::STANDARD.encode(&raw.body),
                url: raw.url.clone(),
            },
            ApiResponse::Failure(err) => Recorded::Failure(err.clone()),
        }
    }
}

impl Recorded {
    /// Rebuild the outcome for `request`.
    ///
    /// Keys ignore the console host, so the URL is taken from the request
    /// being replayed rather than the one recorded.
    fn into_response(self, request: &Request) -> Result<ApiResponse<RawResponse>> {
        match self {
            Recorded::Success {
                status,
                content_type,
                body,
                url: _,
            } => {
                let body = general_purpose::STANDARD
                    .decode(body)
                    .map_err(|e| Error::Fixture(format!("Corrupt fixture body: {}", e)))?;
                Ok(ApiResponse::Success(RawResponse {
                    status,
                    content_type,
                    body,
                    url: request.url.clone(),
                }))
            }
            Recorded::Failure(err) => Ok(ApiResponse::Failure(ApiError {
                endpoint: request.url.clone(),
                ..err
            })),
        }
    }
}

fn fixture_path(dir: &Path, request: &Request) -> PathBuf {
    dir.join(format!("{}.json", request_key(request)))
}

/// Wraps another transport and saves every outcome it produces.
///
/// Network errors are passed on and not recorded.
#[derive(Debug, Clone)]
pub struct RecordingTransport<T> {
    inner: T,
    dir: PathBuf,
}

impl<T: Transport> RecordingTransport<T> {
    pub fn new(inner: T, dir: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl<T: Transport> Transport for RecordingTransport<T> {
    fn execute(&self, request: &Request) -> Result<ApiResponse<RawResponse>> {
        let response = self.inner.execute(request)?;

        fs::create_dir_all(&self.dir)?;
        let path = fixture_path(&self.dir, request);
        let json = serde_json::to_string_pretty(&Recorded::from(&response))?;
        fs::write(&path, json)?;
        log::info!("Recorded {} {} -> {}", request.verb, request.url, path.display());

        Ok(response)
    }
}

/// Serves previously recorded outcomes; never touches the network.
#[derive(Debug, Clone)]
pub struct ReplayTransport {
    dir: PathBuf,
}

impl ReplayTransport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Transport for ReplayTransport {
    fn execute(&self, request: &Request) -> Result<ApiResponse<RawResponse>> {
        let path = fixture_path(&self.dir, request);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No recorded response for {} {}", request.verb, request.url);
                return Err(Error::Fixture(format!(
                    "No recorded response for {} {} (expected {})",
                    request.verb,
                    request.url,
                    path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let recorded: Recorded = serde_json::from_str(&contents)
            .map_err(|e| Error::Fixture(format!("Corrupt fixture {}: {}", path.display(), e)))?;
        recorded.into_response(request)
    }
}

/// Where test responses come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FixtureMode {
    /// Real console
    #[default]
    Live,
    /// Recorded fixtures only
    Replay,
    /// Real console, recording every response
    Capture,
}

impl FixtureMode {
    /// Read the mode from an environment variable, defaulting to `Live`.
    pub fn from_env(var: &str) -> Result<Self> {
        match std::env::var(var) {
            Ok(value) => value.parse(),
            Err(_) => Ok(FixtureMode::Live),
        }
    }

    /// Build the transport for this mode, with fixtures under `dir`.
    pub fn transport(self, dir: impl Into<PathBuf>) -> Arc<dyn Transport> {
        match self {
            FixtureMode::Live => Arc::new(HttpTransport::new()),
            FixtureMode::Replay => Arc::new(ReplayTransport::new(dir)),
            FixtureMode::Capture => Arc::new(RecordingTransport::new(HttpTransport::new(), dir)),
        }
    }
}

impl FromStr for FixtureMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "live" => Ok(FixtureMode::Live),
            "1" | "replay" => Ok(FixtureMode::Replay),
            "2" | "capture" => Ok(FixtureMode::Capture),
            other => Err(Error::Fixture(format!(
                "Unknown fixture mode '{}'. Use 0 (live), 1 (replay) or 2 (capture)",
                other
            ))),
        }
    }
}
