use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status of the CLI.
///
/// - `Success` (0): no error-severity findings (warnings are allowed)
/// - `Failure` (1): at least one error-severity finding
/// - `Error` (2): the audit could not run (bad config, missing folder, usage error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// No error-severity findings.
    Success,
    /// At least one error-severity finding.
    Failure,
    /// The audit could not run.
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        if result.error_count > 0 {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{CommandSummary, helper::finish};

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }

    #[test]
    fn warnings_only_is_success() {
        let result = finish(CommandSummary::Check, Vec::new(), 0, 0, 0);
        assert_eq!(ExitStatus::from_result(&result), ExitStatus::Success);
    }
}
