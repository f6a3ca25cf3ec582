//! Stats command: device and token totals across every flock

use colored::Colorize;

use canarytools::Result;

use crate::cli::{CommandContext, OutputFormat};
use crate::models::FlockOverviewDisplay;
use crate::output;

pub fn run(ctx: &CommandContext) -> Result<()> {
    let summary = ctx.console.flocks.summaries()?.into_result()?;
    let overview = summary.overview();

    let rows: Vec<FlockOverviewDisplay> = overview
        .iter()
        .cloned()
        .map(FlockOverviewDisplay::from)
        .collect();

    if ctx.format == OutputFormat::Json {
        return output::print(&rows, &overview, ctx.format);
    }

    println!("{}\n", "Console Overview".bold());
    output::print(&rows, &overview, ctx.format)?;

    let online: i64 = overview.iter().map(|f| f.online_devices).sum();
    let offline: i64 = overview.iter().map(|f| f.offline_devices).sum();
    let enabled: i64 = overview.iter().map(|f| f.enabled_tokens).sum();
    let disabled: i64 = overview.iter().map(|f| f.disabled_tokens).sum();

    println!();
    println!(
        "Devices: {} online, {} offline",
        online.to_string().green(),
        if offline > 0 {
            offline.to_string().red()
        } else {
            offline.to_string().normal()
        }
    );
    println!(
        "Tokens:  {} enabled, {} disabled",
        enabled.to_string().green(),
        disabled.to_string().dimmed()
    );
    Ok(())
}
