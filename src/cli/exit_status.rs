use std::process::ExitCode;

/// Exit status of a run.
///
/// - `Success` (0): merged document written
/// - `Failure` (1): input rejected (conflicting values, unreadable or malformed file)
/// - `Error` (2): internal error (bad pattern, bad config, output not writable)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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
