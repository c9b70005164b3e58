use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running lproj-audit commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during the check, sorted by location.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of files that could not be read.
    pub parse_error_count: usize,
    /// Number of `.strings` files that were loaded.
    pub resource_files_checked: usize,
    /// Number of locale groups those files formed.
    pub groups_checked: usize,
    /// Number of source files scanned for key references.
    pub source_files_checked: usize,
}
