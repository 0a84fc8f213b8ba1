pub mod audit;
pub mod helper;
pub mod icons;
pub mod init;
pub mod spot_check;

use super::exit_status::ExitStatus;
use crate::{
    icons::{IconError, IconRunSummary},
    paths::ProjectRoot,
    rules::{key_parity::AuditReport, spot_check::SpotCheckReport},
};

#[derive(Debug)]
pub struct IconsSummary {
    pub root: ProjectRoot,
    /// `Err` when the base image could not be used and nothing was written.
    pub outcome: Result<IconRunSummary, IconError>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Audit(AuditReport),
    Icons(IconsSummary),
    SpotCheck(SpotCheckReport),
    Init(InitSummary),
}

/// Result of running an assetctl command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}
