//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use canarytools::Result;

pub mod json;
pub mod table;

/// Print `rows` as a table, or the full `data` as JSON.
///
/// Tables show a digest; JSON carries the console's response untouched.
pub fn print<T, D>(rows: &[T], data: &D, format: OutputFormat) -> Result<()>
where
    T: Tabled,
    D: Serialize + ?Sized,
{
    let output = match format {
        OutputFormat::Table => table::format_table(rows),
        OutputFormat::Json => json::format_json(data)?,
    };
    println!("{}", output);
    Ok(())
}

/// Print a one-line confirmation, or `data` as JSON.
pub fn print_message<D: Serialize + ?Sized>(
    message: &str,
    data: &D,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", message),
        OutputFormat::Json => println!("{}", json::format_json(data)?),
    }
    Ok(())
}
