//! Error types for the Canary Console client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for canarytools operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that are not an ordinary API response.
///
/// A non-2xx status is never reported through this type by the client
/// itself; it arrives as [`ApiResponse::Failure`](crate::ApiResponse). This
/// enum covers local invariant violations, schema drift, and transport
/// breakage where no HTTP status was obtained.
#[derive(Debug, Error)]
pub enum Error {
    #[error("auth_token must be {expected} characters. The one provided is {actual}")]
    InvalidAuthToken { expected: usize, actual: usize },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error(
        "Unexpected response from {endpoint}: {source}. \
         The client model is out of date with the console; please report this."
    )]
    Schema {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Network("Request timed out".to_string())
        } else if err.is_connect() {
            Error::Network("Failed to connect to console".to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

/// A failed API call: any response with a non-2xx status.
///
/// This is a value, not a fault. Executors hand it back inside
/// [`ApiResponse::Failure`](crate::ApiResponse) so callers can branch on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Console returned {status_code} for {endpoint}: {message}")]
pub struct ApiError {
    /// HTTP status code
    pub status_code: u16,

    /// Raw response body
    pub message: String,

    /// Fully formed URL the request was sent to
    pub endpoint: String,
}

impl ApiError {
    /// True for 401/403, the codes the console uses for a bad or disabled token.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status_code, 401 | 403)
    }

    /// True when the endpoint or resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `canarytools init` or pass --console and --api-key.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API key not configured. Set `api_key` in the config file or pass --api-key.")]
    MissingApiKey,

    #[error("Console not configured. Set `console_hash` in the config file or pass --console.")]
    MissingConsole,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ApiError {
        ApiError {
            status_code: 404,
            message: "Not Found".to_string(),
            endpoint: "https://abc.canary.tools/api/v1/devices/filter".to_string(),
        }
    }

    #[test]
    fn test_api_error_message_names_endpoint() {
        let msg = not_found().to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("/api/v1/devices/filter"));
    }

    #[test]
    fn test_api_error_classification() {
        assert!(not_found().is_not_found());
        assert!(!not_found().is_auth_failure());

        let forbidden = ApiError {
            status_code: 403,
            ..not_found()
        };
        assert!(forbidden.is_auth_failure());
    }

    #[test]
    fn test_api_error_json_shape() {
        let value = serde_json::to_value(not_found()).unwrap();
        assert_eq!(value["status_code"], 404);
        assert_eq!(value["message"], "Not Found");
    }

    #[test]
    fn test_invalid_auth_token_message() {
        let err = Error::InvalidAuthToken {
            expected: 32,
            actual: 14,
        };
        let msg = err.to_string();
        assert!(msg.contains("32"));
        assert!(msg.contains("14"));
    }

    #[test]
    fn test_schema_error_asks_for_report() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = Error::Schema {
            endpoint: "https://abc.canary.tools/api/v1/settings".to_string(),
            source,
        };
        assert!(err.to_string().contains("please report"));
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = not_found().into();

        match err {
            Error::Api(api) => assert_eq!(api.status_code, 404),
            _ => panic!("Expected Error::Api"),
        }
    }

    #[test]
    fn test_config_error_missing_api_key() {
        let err = ConfigError::MissingApiKey;
        assert!(err.to_string().contains("--api-key"));
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
