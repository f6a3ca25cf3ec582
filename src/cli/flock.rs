//! Flock command implementations

use colored::Colorize;
use serde_json::Value;
use tabled::Tabled;

use canarytools::{FlockNoteQuery, FlockQuery, FlocksFilterQuery, FlocksForQuery, Result};

use crate::cli::{CommandContext, FlockArgs};
use crate::models::{FlockMetricDisplay, FlockOverviewDisplay};
use crate::output;

fn flock_query(args: &FlockArgs) -> FlockQuery {
    FlockQuery::new(args.flock_id.as_str())
}

/// Key/value row for the opaque flock payloads
#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "FIELD")]
    field: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

fn field_rows(payload: &serde_json::Map<String, Value>) -> Vec<FieldRow> {
    payload
        .iter()
        .map(|(field, value)| FieldRow {
            field: field.clone(),
            value: match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        })
        .collect()
}

pub fn summaries(ctx: &CommandContext) -> Result<()> {
    let summary = ctx.console.flocks.summaries()?.into_result()?;
    let rows: Vec<FlockOverviewDisplay> = summary
        .overview()
        .into_iter()
        .map(FlockOverviewDisplay::from)
        .collect();
    output::print(&rows, &summary, ctx.format)
}

pub fn summary(ctx: &CommandContext, args: &FlockArgs) -> Result<()> {
    let summary = ctx.console.flocks.summary(&flock_query(args))?.into_result()?;
    output::print(&FlockMetricDisplay::rows(&summary), &summary, ctx.format)
}

pub fn list(ctx: &CommandContext, args: &FlockArgs) -> Result<()> {
    #[derive(Tabled)]
    struct SensorRow {
        #[tabled(rename = "SENSOR")]
        sensor: String,
    }

    let sensors = ctx.console.flocks.list_all(&flock_query(args))?.into_result()?;
    let rows: Vec<SensorRow> = sensors
        .sensors
        .iter()
        .map(|s| SensorRow { sensor: s.clone() })
        .collect();
    output::print(&rows, &sensors, ctx.format)
}

pub fn settings(ctx: &CommandContext, args: &FlockArgs) -> Result<()> {
    let settings = ctx.console.flocks.settings(&flock_query(args))?.into_result()?;
    let rows = settings
        .settings
        .as_object()
        .map(field_rows)
        .unwrap_or_default();
    output::print(&rows, &settings, ctx.format)
}

pub fn users(ctx: &CommandContext, args: &FlockArgs) -> Result<()> {
    let users = ctx.console.flocks.users(&flock_query(args))?.into_result()?;
    output::print(&field_rows(&users.payload), &users, ctx.format)
}

pub fn filter(ctx: &CommandContext, filter: &str) -> Result<()> {
    let flocks = ctx
        .console
        .flocks
        .filter(&FlocksFilterQuery::new(filter))?
        .into_result()?;
    output::print(&field_rows(&flocks.payload), &flocks, ctx.format)
}

pub fn list_for(ctx: &CommandContext, email: &str) -> Result<()> {
    let flocks = ctx
        .console
        .flocks
        .list_for(&FlocksForQuery::new(email))?
        .into_result()?;
    output::print(&field_rows(&flocks.payload), &flocks, ctx.format)
}

pub fn note_get(ctx: &CommandContext, args: &FlockArgs) -> Result<()> {
    let note = ctx.console.flocks.get_note(&flock_query(args))?.into_result()?;
    let message = match note.note.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => format!("{}", "No note set.".dimmed()),
    };
    output::print_message(&message, &note, ctx.format)
}

pub fn note_add(ctx: &CommandContext, note: &str, args: &FlockArgs) -> Result<()> {
    let query = FlockNoteQuery::new(note).flock_id(args.flock_id.as_str());
    let result = ctx.console.flocks.add_note(&query)?.into_result()?;
    output::print_message(
        &format!("{} Note saved on {}", "✓".green(), args.flock_id.bold()),
        &result,
        ctx.format,
    )
}

pub fn note_delete(ctx: &CommandContext, args: &FlockArgs) -> Result<()> {
    let result = ctx.console.flocks.delete_note(&flock_query(args))?.into_result()?;
    output::print_message(
        &format!("{} Note removed from {}", "✓".green(), args.flock_id.bold()),
        &result,
        ctx.format,
    )
}
