//! Command execution context
//!
//! Loads the config file, applies flag and environment overrides, and builds
//! the console every command talks to.

use canarytools::{Config, ConfigError, Console, Error, Result};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;

/// Context for command execution
pub struct CommandContext {
    pub console: Console,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Resolve configuration and build the console.
    ///
    /// A missing config file is fine as long as the flags or environment
    /// supply a key and a console.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Self::resolve_config(opts)?;
        let console = config.console()?;

        log::debug!("Using console {}", console.base_url());

        Ok(Self {
            console,
            format: opts.format,
        })
    }

    /// Config file merged with overrides, without building a console
    pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
        let mut config = match Config::load_at(opts.config_ref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::NotFound)) if opts.api_key.is_some() => {
                Config::default()
            }
            Err(e) => return Err(e),
        };

        config.apply_overrides(
            opts.console_ref(),
            opts.api_key_ref(),
            opts.api_host_ref(),
            opts.timeout,
        );

        Ok(config)
    }
}
