//! Status command implementation

use colored::Colorize;

use canarytools::client::endpoints::console_base_url;
use canarytools::{AuthToken, Result};

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;

/// Show where configuration comes from and whether it is usable.
///
/// Makes no network calls.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "canarytools Configuration Status".bold());

    let config_path = canarytools::Config::resolve_path(opts.config_ref())?;

    let config = match CommandContext::resolve_config(opts) {
        Ok(config) => config,
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "canarytools init --console <HASH> --api-key <KEY>".cyan()
            );
            println!();
            return Ok(());
        }
    };

    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!("Config file: {}", "none (flags/environment only)".dimmed());
    }
    println!();

    match config.api_key.as_deref().map(AuthToken::new) {
        Some(Ok(_)) => println!("{} API key configured", "✓".green()),
        Some(Err(e)) => println!("{} API key invalid: {}", "✗".red(), e),
        None => {
            println!("{} API key not configured", "✗".red());
            println!("  → Run 'canarytools init' to configure");
        }
    }

    match (&config.api_host, &config.console_hash) {
        (Some(host), _) => println!("{} Custom API host: {}", "○".dimmed(), host.cyan()),
        (None, Some(hash)) => println!("{} Console: {}", "✓".green(), console_base_url(hash)),
        (None, None) => {
            println!("{} Console not configured", "✗".red());
            println!("  → Pass --console or set console_hash in the config file");
        }
    }

    if let Some(secs) = config.timeout_secs {
        println!("{} Request timeout: {}s", "○".dimmed(), secs);
    }

    println!();
    Ok(())
}
