//! Authentication models

use std::collections::BTreeMap;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Length every console API token has
pub const AUTH_TOKEN_LENGTH: usize = 32;

/// Query parameter name the console reads the token from
pub const AUTH_TOKEN_PARAM: &str = "auth_token";

/// Console API token.
///
/// Always exactly [`AUTH_TOKEN_LENGTH`] characters. The value is kept in a
/// [`SecretString`]; `Debug` is redacted, while [`AuthToken::expose`],
/// [`AuthToken::secret_dict`] and serialization yield the real value.
#[derive(Clone)]
pub struct AuthToken {
    auth_token: SecretString,
}

impl AuthToken {
    /// Validate and wrap a raw token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let actual = token.chars().count();
        if actual != AUTH_TOKEN_LENGTH {
            return Err(Error::InvalidAuthToken {
                expected: AUTH_TOKEN_LENGTH,
                actual,
            });
        }
        Ok(Self {
            auth_token: SecretString::from(token),
        })
    }

    /// The raw token value
    pub fn expose(&self) -> &str {
        self.auth_token.expose_secret()
    }

    /// The token as a plain query parameter mapping: `{"auth_token": <value>}`
    pub fn secret_dict(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(AUTH_TOKEN_PARAM.to_string(), self.expose().to_string())])
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("auth_token", &"**********")
            .finish()
    }
}

impl PartialEq for AuthToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for AuthToken {}

impl TryFrom<String> for AuthToken {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for AuthToken {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        AuthToken::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Serializes the real value so token-bearing models round-trip.
/// Rendering layers redact it themselves.
impl Serialize for AuthToken {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.expose())
    }
}
