use std::process::ExitCode;

/// Exit status for assetctl commands.
///
/// - `Success` (0): every check passed and every icon was generated
/// - `Failure` (1): the command ran but found missing keys or failed icons
/// - `Error` (2): the command could not run (bad config, unreadable spot-check file, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_success(success: bool) -> Self {
        if success {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
