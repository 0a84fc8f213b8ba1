use anyhow::Result;

use super::{CommandResult, CommandSummary, IconsSummary, helper::CommandContext};
use crate::{
    cli::{args::IconsCommand, exit_status::ExitStatus},
    icons::generate_all,
};

pub fn icons(cmd: IconsCommand) -> Result<CommandResult> {
    let mut ctx = CommandContext::new(&cmd.common)?;

    if let Some(source) = cmd.source {
        ctx.config.icons.source = source;
    }
    ctx.config.validate()?;

    let outcome = generate_all(&ctx.root, &ctx.config.icons);
    let success = matches!(&outcome, Ok(summary) if summary.is_success());

    Ok(CommandResult {
        summary: CommandSummary::Icons(IconsSummary {
            root: ctx.root,
            outcome,
        }),
        status: ExitStatus::from_success(success),
    })
}
