//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag > environment variable > config file. This struct
/// captures the flag/env layer; the config file is merged in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.canarytools/config.yaml)
    pub config: Option<String>,

    pub console: Option<String>,

    pub api_key: Option<String>,

    /// Full base URL override
    pub api_host: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl GlobalOptions {
    /// Called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            console: cli.console.clone(),
            api_key: cli.api_key.clone(),
            api_host: cli.api_host.clone(),
            timeout: cli.timeout,
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn console_ref(&self) -> Option<&str> {
        self.console.as_deref()
    }

    pub fn api_key_ref(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
