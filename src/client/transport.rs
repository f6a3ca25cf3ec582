//! HTTP transport
//!
//! A [`Transport`] performs exactly one round trip and classifies it: a 2xx
//! becomes [`ApiResponse::Success`] carrying the raw envelope, anything else
//! becomes [`ApiResponse::Failure`] carrying an [`ApiError`]. Only failures
//! that never produced a status (connect, TLS, timeout) are returned as
//! `Err`.

use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::request::Request;
use super::response::ApiResponse;
use crate::error::{ApiError, Error, Result};

/// Executes one request. Swappable per console for tests and replay.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &Request) -> Result<ApiResponse<RawResponse>>;
}

/// Raw successful response, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    /// URL the request was sent to
    pub url: String,
}

impl RawResponse {
    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> std::result::Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Body decoded as UTF-8, replacing invalid sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }
}

/// Transport backed by a blocking reqwest client.
///
/// Each call builds its own client, so no connection outlives the call.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Transport using reqwest's default timeout
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport with an explicit per-request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn client(&self) -> Result<HttpClient> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(Error::from)
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &Request) -> Result<ApiResponse<RawResponse>> {
        let client = self.client()?;

        let response = client
            .request(request.verb.method(), &request.url)
            .query(&request.params)
            .send()
            .map_err(Error::from)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if !status.is_success() {
            log::debug!("{} {} -> {}", request.verb, request.url, status);
            return Ok(ApiResponse::Failure(api_error(
                status.as_u16(),
                &request.url,
                response.text(),
            )));
        }

        let body = response.bytes().map_err(Error::from)?.to_vec();

        Ok(ApiResponse::Success(RawResponse {
            status: status.as_u16(),
            content_type,
            body,
            url: request.url.clone(),
        }))
    }
}

/// Error for a non-2xx status.
///
/// The status alone decides the outcome; an unreadable body leaves the
/// message empty.
fn api_error<E: std::fmt::Display>(
    status_code: u16,
    endpoint: &str,
    body: std::result::Result<String, E>,
) -> ApiError {
    let message = body.unwrap_or_else(|e| {
        log::debug!("Could not read error body from {}: {}", endpoint, e);
        String::new()
    });
    ApiError {
        status_code,
        message,
        endpoint: endpoint.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::endpoints::Verb;
    use crate::client::request::Params;

    fn request(url: String) -> Request {
        Request {
            verb: Verb::Get,
            url,
            params: Params::from([("auth_token".to_string(), "e".repeat(32))]),
        }
    }

    #[test]
    fn test_success_keeps_body_and_content_type() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/api/v1/settings")
            .match_query(mockito::Matcher::UrlEncoded(
                "auth_token".into(),
                "e".repeat(32),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"result": "success"}"#)
            .create();

        let url = format!("{}/api/v1/settings", server.url());
        let response = HttpTransport::new().execute(&request(url.clone())).unwrap();

        match response {
            ApiResponse::Success(raw) => {
                assert_eq!(raw.status, 200);
                assert_eq!(raw.content_type.as_deref(), Some("application/json"));
                assert_eq!(raw.url, url);
                let value: serde_json::Value = raw.json().unwrap();
                assert_eq!(value["result"], "success");
            }
            ApiResponse::Failure(e) => panic!("Expected success, got {e}"),
        }
    }

    #[test]
    fn test_non_success_becomes_api_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/api/v1/nope")
            .match_query(mockito::Matcher::Any)
            .with_status(403)
            .with_body("forbidden")
            .create();

        let url = format!("{}/api/v1/nope", server.url());
        let response = HttpTransport::with_timeout(Duration::from_secs(5))
            .execute(&request(url.clone()))
            .unwrap();

        match response {
            ApiResponse::Failure(e) => {
                assert_eq!(e.status_code, 403);
                assert_eq!(e.message, "forbidden");
                assert_eq!(e.endpoint, url);
            }
            ApiResponse::Success(_) => panic!("Expected failure"),
        }
    }

    #[test]
    fn test_unreadable_error_body_is_still_api_error() {
        let body: std::result::Result<String, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset",
        ));
        let err = api_error(502, "https://c.canary.tools/api/v1/settings", body);

        assert_eq!(err.status_code, 502);
        assert_eq!(err.message, "");
        assert_eq!(err.endpoint, "https://c.canary.tools/api/v1/settings");
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let result = HttpTransport::with_timeout(Duration::from_secs(2))
            .execute(&request("http://127.0.0.1:9/api/v1/settings".to_string()));

        match result {
            Err(Error::Network(_)) => (),
            other => panic!("Expected network error, got {other:?}"),
        }
    }

    #[test]
    fn test_raw_response_text_is_lossy() {
        let raw = RawResponse {
            status: 200,
            content_type: Some("text/plain".to_string()),
            body: vec![b'o', b'k', 0xff],
            url: String::new(),
        };
        assert!(raw.text().starts_with("ok"));
        assert_eq!(raw.bytes().len(), 3);
    }
}
