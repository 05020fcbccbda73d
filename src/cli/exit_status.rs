use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): everything requested was indexed or found
/// - `Failure` (1): the command ran but some files were unreadable or a lookup missed
/// - `Error` (2): the command could not run (bad config, I/O error, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_failure_count(count: usize) -> Self {
        if count > 0 {
            Self::Failure
        } else {
            Self::Success
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
