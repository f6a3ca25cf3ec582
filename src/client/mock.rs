//! Scripted transport for unit tests
//!
//! Returns queued responses in order and records every request it sees, so
//! executor tests can assert on the exact outgoing parameters.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::request::Request;
use super::response::ApiResponse;
use super::transport::{RawResponse, Transport};
use crate::error::{ApiError, Result};

#[derive(Debug, Clone)]
struct Scripted {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

/// Mock transport.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new().with_json(r#"{"result": "success"}"#);
/// let api = Api::new(config, Arc::new(mock.clone()));
/// api.enable()?;
/// assert_eq!(mock.requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    captured: Arc<Mutex<Vec<Request>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, scripted: Scripted) -> Self {
        self.responses
            .lock()
            .expect("mock lock poisoned")
            .push_back(scripted);
        self
    }

    /// Queue a 200 JSON response.
    pub fn with_json(self, body: impl Into<String>) -> Self {
        self.push(Scripted {
            status: 200,
            content_type: "application/json",
            body: body.into().into_bytes(),
        })
    }

    /// Queue a 200 plain-text response.
    pub fn with_text(self, body: impl Into<String>) -> Self {
        self.push(Scripted {
            status: 200,
            content_type: "text/plain",
            body: body.into().into_bytes(),
        })
    }

    /// Queue a 200 binary response.
    pub fn with_bytes(self, body: Vec<u8>) -> Self {
        self.push(Scripted {
            status: 200,
            content_type: "application/octet-stream",
            body,
        })
    }

    /// Queue a non-2xx response.
    pub fn with_status(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Scripted {
            status,
            content_type: "text/html",
            body: body.into().into_bytes(),
        })
    }

    /// Every request executed so far
    pub fn requests(&self) -> Vec<Request> {
        self.captured.lock().expect("mock lock poisoned").clone()
    }

    /// The most recent request
    pub fn last_request(&self) -> Request {
        self.requests()
            .pop()
            .expect("no request has been executed")
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &Request) -> Result<ApiResponse<RawResponse>> {
        self.captured
            .lock()
            .expect("mock lock poisoned")
            .push(request.clone());

        let scripted = self
            .responses
            .lock()
            .expect("mock lock poisoned")
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response for {}", request.url));

        if !(200..300).contains(&scripted.status) {
            return Ok(ApiResponse::Failure(ApiError {
                status_code: scripted.status,
                message: String::from_utf8_lossy(&scripted.body).into_owned(),
                endpoint: request.url.clone(),
            }));
        }

        Ok(ApiResponse::Success(RawResponse {
            status: scripted.status,
            content_type: Some(scripted.content_type.to_string()),
            body: scripted.body,
            url: request.url.clone(),
        }))
    }
}
