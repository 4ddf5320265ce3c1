use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): nothing left to sort
/// - `Failure` (1): unsorted structures found (or still pending after a fix)
/// - `Error` (2): the run itself failed (bad config, unparsable files in `fix`)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status of `check`: any reported issue fails the run.
    pub fn for_check(issue_count: usize) -> Self {
        if issue_count == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }

    /// Status of `fix`.
    ///
    /// In dry-run mode pending work is a failure, so CI can use `fix` as a check.
    pub fn for_fix(parse_errors: usize, pending: usize, apply: bool, remaining: usize) -> Self {
        if parse_errors > 0 {
            ExitStatus::Error
        } else if (pending > 0 && !apply) || remaining > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
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
