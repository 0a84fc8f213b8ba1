//! Dispatches parsed arguments to the matching command handler.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command's report and exit status
//! - `Err` if the command cannot run (e.g., invalid config, unreadable file)

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, audit::audit, icons::icons, init::init, spot_check::spot_check,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Audit(cmd)) => audit(cmd),
        Some(Command::Icons(cmd)) => icons(cmd),
        Some(Command::SpotCheck(cmd)) => spot_check(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
