//! API access command implementations

use std::path::Path;

use colored::Colorize;

use canarytools::Result;

use crate::cli::CommandContext;
use crate::output;

pub fn enable(ctx: &CommandContext) -> Result<()> {
    let result = ctx.console.api.enable()?.into_result()?;
    output::print_message(
        &format!("{} API enabled ({})", "✓".green(), result.result),
        &result,
        ctx.format,
    )
}

pub fn disable(ctx: &CommandContext) -> Result<()> {
    let result = ctx.console.api.disable()?.into_result()?;
    output::print_message(
        &format!("{} API disabled ({})", "✓".green(), result.result),
        &result,
        ctx.format,
    )
}

/// Download the token file and write it to `output`.
pub fn download(ctx: &CommandContext, path: &Path) -> Result<()> {
    let mut file = ctx.console.api.auth_token_download()?.into_result()?;
    file.write_to(path)?;

    let written = serde_json::json!({
        "auth_token_file": path,
        "bytes": file.auth_token_file_as_bytes.len(),
    });
    output::print_message(
        &format!("{} Token file written to {}", "✓".green(), path.display()),
        &written,
        ctx.format,
    )
}
