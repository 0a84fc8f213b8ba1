use std::path::Path;

use anyhow::{Result, anyhow};

use super::{CommandResult, CommandSummary, helper::CommandContext};
use crate::{
    cli::{args::SpotCheckCommand, exit_status::ExitStatus},
    rules::spot_check::spot_check as check_file,
};

/// The verdict is printed, not encoded in the exit status: any file that
/// loads exits 0.
pub fn spot_check(cmd: SpotCheckCommand) -> Result<CommandResult> {
    let mut ctx = CommandContext::new(&cmd.common)?;

    if let Some(file) = cmd.file {
        ctx.config.spot_check.file = file;
    }
    if !cmd.expected_keys.is_empty() {
        ctx.config.spot_check.expected_keys = cmd.expected_keys;
    }

    let file = &ctx.config.spot_check.file;
    let report = check_file(&ctx.root, Path::new(file), &ctx.config.spot_check.expected_keys)
        // The locale error already names its cause; keep it a single line.
        .map_err(|err| anyhow!("Failed to spot-check {}: {}", file, err))?;

    Ok(CommandResult {
        summary: CommandSummary::SpotCheck(report),
        status: ExitStatus::Success,
    })
}
