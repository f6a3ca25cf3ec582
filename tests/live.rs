//! Tests against a real console
//!
//! Needs `CONSOLE_HASH` and `API_KEY`. `TEST_SOURCE` picks live (0),
//! replay (1) or capture (2); recordings live under `tests/recordings`.
//!
//! Run with: cargo test --features live-tests --test live

#![cfg(feature = "live-tests")]

use std::path::PathBuf;

use canarytools::client::FixtureMode;
use canarytools::{
    ApiResponse, Console, DevicesQuery, FlockQuery, IncidentsQuery, Result,
};

const PLACEHOLDER_KEY: &str = "00000000000000000000000000000000";

fn console() -> Result<Console> {
    let mode = FixtureMode::from_env("TEST_SOURCE")?;
    let recordings = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("recordings");

    // Replay never sends the key, so a placeholder is enough offline
    let api_key = std::env::var("API_KEY").unwrap_or_else(|_| PLACEHOLDER_KEY.to_string());
    let hash = std::env::var("CONSOLE_HASH").unwrap_or_else(|_| "replay".to_string());

    Console::builder()
        .console_hash(hash)
        .api_key(api_key)
        .transport(mode.transport(recordings))
        .build()
}

fn success<T: std::fmt::Debug>(response: ApiResponse<T>) -> T {
    match response {
        ApiResponse::Success(value) => value,
        ApiResponse::Failure(err) => panic!("console refused the request: {err}"),
    }
}

#[test]
fn settings_report_console_domain() -> Result<()> {
    let settings = success(console()?.settings.fetch()?);
    assert!(!settings.console_domain.is_empty());
    Ok(())
}

#[test]
fn devices_partition_into_live_and_dead() -> Result<()> {
    let console = console()?;
    let query = DevicesQuery::new();

    let all = success(console.devices.all(&query)?);
    let live = success(console.devices.live(&query)?);
    let dead = success(console.devices.dead(&query)?);

    assert_eq!(all.entries().len(), live.entries().len() + dead.entries().len());
    Ok(())
}

#[test]
fn unacknowledged_incidents_respect_limit() -> Result<()> {
    let page = success(
        console()?
            .incidents
            .unacknowledged(&IncidentsQuery::new().limit(2))?,
    );
    assert!(page.incidents.len() <= 2);
    Ok(())
}

#[test]
fn default_flock_has_a_summary() -> Result<()> {
    let console = console()?;
    let summaries = success(console.flocks.summaries()?);
    assert!(summaries.flocks_summary.contains_key("flock:default"));

    success(console.flocks.summary(&FlockQuery::default())?);
    Ok(())
}
