//! Configuration management for canarytools
//!
//! A small YAML file, `~/.canarytools/config.yaml` by default, holding the
//! console to talk to and the API key. Command-line flags and `CANARY_*`
//! environment variables override it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::Console;
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tenant hash, the `1234abcd` in `1234abcd.canary.tools`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_hash: Option<String>,

    /// Console API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Full base URL; overrides the hosted domain (on-prem consoles, testing)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Per-request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".canarytools").join("config.yaml"))
    }

    /// Explicit path if given, otherwise the default
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`, or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to `path`, or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific file, readable only by the owner
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Check that a key and a console location are present
    pub fn validate_auth(&self) -> Result<()> {
        if self.api_key.is_none() {
            return Err(ConfigError::MissingApiKey.into());
        }
        if self.console_hash.is_none() && self.api_host.is_none() {
            return Err(ConfigError::MissingConsole.into());
        }
        Ok(())
    }

    /// Overlay non-empty values from flags or the environment.
    pub fn apply_overrides(
        &mut self,
        console_hash: Option<&str>,
        api_key: Option<&str>,
        api_host: Option<&str>,
        timeout_secs: Option<u64>,
    ) {
        fn set(slot: &mut Option<String>, value: Option<&str>) {
            if let Some(v) = value.filter(|v| !v.is_empty()) {
                *slot = Some(v.to_string());
            }
        }

        set(&mut self.console_hash, console_hash);
        set(&mut self.api_key, api_key);
        set(&mut self.api_host, api_host);
        if timeout_secs.is_some() {
            self.timeout_secs = timeout_secs;
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Build a console from this configuration.
    pub fn console(&self) -> Result<Console> {
        self.validate_auth()?;

        let mut builder = Console::builder();
        if let Some(key) = &self.api_key {
            builder = builder.api_key(key.as_str());
        }
        if let Some(hash) = &self.console_hash {
            builder = builder.console_hash(hash.as_str());
        }
        if let Some(host) = &self.api_host {
            builder = builder.base_url(host.as_str());
        }
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}
