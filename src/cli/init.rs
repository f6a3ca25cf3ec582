//! Init command implementation

use colored::Colorize;

use canarytools::{AuthToken, Config, ConfigError, Result};

use crate::cli::args::GlobalOptions;

/// Write `--console`/`--api-key` (and optional `--api-host`, `--timeout`)
/// to the config file, keeping any values already there.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    config.apply_overrides(
        opts.console_ref(),
        opts.api_key_ref(),
        opts.api_host_ref(),
        opts.timeout,
    );

    let api_key = config.api_key.as_deref().ok_or(ConfigError::MissingApiKey)?;
    AuthToken::new(api_key)?;
    config.validate_auth()?;

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "canarytools status".cyan());
    println!(
        "  {} - List unacknowledged incidents",
        "canarytools incidents unacknowledged".cyan()
    );

    Ok(())
}
