use std::path::Path;

use anyhow::Result;

use super::{CommandResult, CommandSummary, helper::CommandContext};
use crate::{
    cli::{args::AuditCommand, exit_status::ExitStatus},
    rules::key_parity::audit_translations,
};

pub fn audit(cmd: AuditCommand) -> Result<CommandResult> {
    let mut ctx = CommandContext::new(&cmd.common)?;

    if let Some(dir) = cmd.translations_dir {
        ctx.config.translations_dir = dir;
    }
    if !cmd.languages.is_empty() {
        ctx.config.languages = cmd.languages;
    }
    ctx.config.validate()?;

    let report = audit_translations(
        &ctx.root,
        Path::new(&ctx.config.translations_dir),
        &ctx.config.languages,
    );

    Ok(CommandResult {
        status: ExitStatus::from_success(report.is_consistent()),
        summary: CommandSummary::Audit(report),
    })
}
