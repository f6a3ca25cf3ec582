//! Device command implementations

use canarytools::{
    DeviceInfoQuery, DeviceIpsQuery, DeviceIpsResult, Devices, DevicesQuery, Result,
};
use serde_json::Value;

use crate::cli::{CommandContext, OutputFormat};
use crate::models::DeviceDisplay;
use crate::output;

/// Which device listing to query
#[derive(Debug, Clone, Copy)]
pub enum Listing {
    All,
    Live,
    Dead,
}

fn devices_query(tz: Option<&str>) -> DevicesQuery {
    match tz {
        Some(tz) => DevicesQuery::new().tz(tz),
        None => DevicesQuery::new(),
    }
}

fn print_devices(ctx: &CommandContext, devices: &Devices) -> Result<()> {
    let rows: Vec<DeviceDisplay> = devices.entries().iter().map(DeviceDisplay::from).collect();
    output::print(&rows, devices, ctx.format)
}

pub fn list(ctx: &CommandContext, listing: Listing, tz: Option<&str>) -> Result<()> {
    let query = devices_query(tz);
    let executor = &ctx.console.devices;
    let devices = match listing {
        Listing::All => executor.all(&query)?,
        Listing::Live => executor.live(&query)?,
        Listing::Dead => executor.dead(&query)?,
    }
    .into_result()?;
    print_devices(ctx, &devices)
}

pub fn filter(ctx: &CommandContext, filter: &str, tz: Option<&str>) -> Result<()> {
    let query = devices_query(tz).filter_str(filter);
    let devices = ctx.console.devices.filter(&query)?.into_result()?;
    print_devices(ctx, &devices)
}

pub fn info(ctx: &CommandContext, query: &DeviceInfoQuery) -> Result<()> {
    let device = ctx.console.devices.info(query)?.into_result()?;
    let rows = vec![DeviceDisplay::from(&device.device)];
    output::print(&rows, &device, ctx.format)
}

pub fn ips(ctx: &CommandContext, query: &DeviceIpsQuery) -> Result<()> {
    match ctx.console.devices.ips(query)?.into_result()? {
        // Plain text stays plain in table mode so it can be piped
        DeviceIpsResult::Text(text) if ctx.format == OutputFormat::Table => {
            for line in text.lines() {
                println!("{}", line);
            }
            Ok(())
        }
        result => {
            let rows = ip_rows(&result);
            output::print(&rows, &result, ctx.format)
        }
    }
}

#[derive(tabled::Tabled)]
struct IpRow {
    #[tabled(rename = "IP")]
    ip: String,
}

fn ip_rows(result: &DeviceIpsResult) -> Vec<IpRow> {
    match result {
        DeviceIpsResult::Text(text) => text
            .lines()
            .map(|ip| IpRow { ip: ip.to_string() })
            .collect(),
        DeviceIpsResult::Structured(ips) => match &ips.ips {
            Value::Array(items) => items
                .iter()
                .map(|item| IpRow {
                    ip: match item {
                        Value::String(s) => s.clone(),
                        other => other
                            .get("ip")
                            .or_else(|| other.get("ip_address"))
                            .and_then(Value::as_str)
                            .map(str::to_string)
                            .unwrap_or_else(|| other.to_string()),
                    },
                })
                .collect(),
            Value::Object(map) => map.keys().map(|ip| IpRow { ip: ip.clone() }).collect(),
            _ => Vec::new(),
        },
    }
}
