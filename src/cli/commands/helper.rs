use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Report, Severity};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    resource_files_checked: usize,
    groups_checked: usize,
    source_files_checked: usize,
) -> CommandResult {
    issues.sort_by(|a, b| {
        a.location()
            .position()
            .cmp(&b.location().position())
            .then_with(|| a.rule().cmp(&b.rule()))
            .then_with(|| a.message().cmp(&b.message()))
    });

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    CommandResult {
        summary,
        error_count,
        warning_count: issues.len() - error_count,
        issues,
        parse_error_count,
        resource_files_checked,
        groups_checked,
        source_files_checked,
    }
}
