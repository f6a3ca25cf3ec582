//! Settings command implementation

use canarytools::Result;

use crate::cli::CommandContext;
use crate::models::SettingDisplay;
use crate::output;

pub fn run(ctx: &CommandContext) -> Result<()> {
    let settings = ctx.console.settings.fetch()?.into_result()?;
    let rows = SettingDisplay::rows(&settings)?;
    output::print(&rows, &SettingDisplay::redacted(&settings)?, ctx.format)
}
