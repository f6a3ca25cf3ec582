//! Response outcome and validation

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::RawResponse;
use crate::error::{ApiError, Error, Result};

/// Outcome of one console call: a model, or the API's refusal.
///
/// Both are expected steady-state results. Schema drift and local errors are
/// reported separately through [`crate::Error`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success(T),
    Failure(ApiError),
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ApiResponse::Failure(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Failure(_) => None,
        }
    }

    pub fn failure(self) -> Option<ApiError> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(err) => Some(err),
        }
    }

    /// Transform the success value; failures pass through untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(value) => ApiResponse::Success(f(value)),
            ApiResponse::Failure(err) => ApiResponse::Failure(err),
        }
    }

    /// Collapse into a `Result`, treating a failure as [`Error::Api`].
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiResponse::Success(value) => Ok(value),
            ApiResponse::Failure(err) => Err(Error::Api(err)),
        }
    }
}

impl<T> From<std::result::Result<T, ApiError>> for ApiResponse<T> {
    fn from(result: std::result::Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => ApiResponse::Success(value),
            Err(err) => ApiResponse::Failure(err),
        }
    }
}

/// Validate a transport outcome against model `T`.
///
/// Failures pass through unchanged. A body that does not match `T` means the
/// client's model is stale: a warning is logged and [`Error::Schema`] is
/// returned rather than folded into a failure.
pub fn check_response<T: DeserializeOwned>(
    response: ApiResponse<RawResponse>,
) -> Result<ApiResponse<T>> {
    let raw = match response {
        ApiResponse::Failure(err) => return Ok(ApiResponse::Failure(err)),
        ApiResponse::Success(raw) => raw,
    };

    match raw.json::<T>() {
        Ok(model) => Ok(ApiResponse::Success(model)),
        Err(source) => {
            log::warn!(
                "Validation error occurred. The client got unexpected data from {}. \
                 This is most likely a bug in canarytools, please open an issue and include: {}",
                raw.url,
                source
            );
            Err(Error::Schema {
                endpoint: raw.url,
                source,
            })
        }
    }
}
