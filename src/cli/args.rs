//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `audit`: Compare translation key sets across languages
//! - `icons`: Generate the app icon matrix from one source image
//! - `spot-check`: Verify one locale file against a list of expected keys
//! - `init`: Write a default `.assetctlrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Audit(cmd)) => cmd.common.verbose,
            Some(Command::Icons(cmd)) => cmd.common.verbose,
            Some(Command::SpotCheck(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory (overrides config file location)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct AuditCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory holding <lang>.json files (overrides config file)
    #[arg(long)]
    pub translations_dir: Option<String>,

    /// Language codes to compare, comma separated (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,
}

#[derive(Debug, Args)]
pub struct IconsCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Source image (overrides config file)
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Debug, Args)]
pub struct SpotCheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Locale file to verify (overrides config file)
    #[arg(long)]
    pub file: Option<String>,

    /// Key that must be present; repeat for several (overrides config file)
    #[arg(long = "expect")]
    pub expected_keys: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translation keys missing from any language file
    Audit(AuditCommand),
    /// Generate app icons for every platform from one source image
    Icons(IconsCommand),
    /// Check one locale file for duplicate keys and expected keys
    SpotCheck(SpotCheckCommand),
    /// Initialize a new .assetctlrc.json configuration file
    Init,
}
