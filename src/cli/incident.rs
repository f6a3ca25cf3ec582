//! Incident command implementations

use colored::Colorize;

use canarytools::{ApiResponse, Incidents, Result, ThinkstResult};

use crate::cli::{CommandContext, IncidentFilterArgs, IncidentIdArgs, OutputFormat};
use crate::models::IncidentDisplay;
use crate::output;

/// Which incident listing to query
#[derive(Debug, Clone, Copy)]
pub enum Listing {
    Acknowledged,
    Unacknowledged,
    All,
}

pub fn list(ctx: &CommandContext, listing: Listing, args: &IncidentFilterArgs) -> Result<()> {
    let query = args.to_query();
    let incidents = &ctx.console.incidents;
    let page: Incidents = match listing {
        Listing::Acknowledged => incidents.acknowledged(&query)?,
        Listing::Unacknowledged => incidents.unacknowledged(&query)?,
        Listing::All => incidents.all(&query)?,
    }
    .into_result()?;

    let rows: Vec<IncidentDisplay> = page.incidents.iter().map(IncidentDisplay::from).collect();
    output::print(&rows, &page, ctx.format)?;

    if let (OutputFormat::Table, Some(next)) = (ctx.format, page.cursor.next.as_deref()) {
        println!("\nMore results: --cursor {}", next);
    }
    Ok(())
}

pub fn fetch(ctx: &CommandContext, args: &IncidentIdArgs) -> Result<()> {
    let query = args.to_query()?;
    let single = ctx.console.incident_actions.fetch(&query)?.into_result()?;

    let label = query.hash_id().or(query.incident()).unwrap_or_default();
    let created = single.incident.created().to_string();
    let rows = vec![IncidentDisplay::new(label, &created, &single.incident)];
    output::print(&rows, &single, ctx.format)
}

/// Action applied to one incident
#[derive(Debug, Clone, Copy)]
pub enum Action {
    Acknowledge,
    Unacknowledge,
    Delete,
}

pub fn act(ctx: &CommandContext, action: Action, args: &IncidentIdArgs) -> Result<()> {
    let query = args.to_query()?;
    let actions = &ctx.console.incident_actions;
    let (response, verb): (ApiResponse<ThinkstResult>, &str) = match action {
        Action::Acknowledge => (actions.acknowledge(&query)?, "acknowledged"),
        Action::Unacknowledge => (actions.unacknowledge(&query)?, "unacknowledged"),
        Action::Delete => (actions.delete(&query)?, "deleted"),
    };
    let result = response.into_result()?;

    let target = query.incident().or(query.hash_id()).unwrap_or_default();
    output::print_message(
        &format!("{} Incident {} {}", "✓".green(), target.bold(), verb),
        &result,
        ctx.format,
    )
}
