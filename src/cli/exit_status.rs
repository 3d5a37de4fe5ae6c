use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, nothing wrong found
/// - `Failure` (1): Command completed but found malformed directives
/// - `Error` (2): Command failed due to internal error (config error, unreadable root, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, nothing wrong found.
    Success,
    /// Command completed but found malformed directives.
    Failure,
    /// Command failed due to internal error.
    Error,
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
