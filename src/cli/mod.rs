//! Command-line interface layer.

use std::io;

use anyhow::Result;
use tracing::Level;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    init_logging(verbose);

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.status)
}

/// Progress logging goes to stderr so reports on stdout stay clean.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_writer(io::stderr)
        .try_init();
}
