//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow lproj-audit to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::SourceContext;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of usages to display per issue.
const MAX_USAGES_DISPLAY: usize = 3;

/// Print issues in cargo-style format to stdout.
///
/// Issues are displayed in the given order with severity, location, source
/// context, and details, followed by a summary line.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(resource_files: usize, groups: usize, source_files: usize) {
    print_success_to(resource_files, groups, source_files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(
    resource_files: usize,
    groups: usize,
    source_files: usize,
    writer: &mut W,
) {
    let msg = format!(
        "Checked {} resource {} in {} {}, {} source {} - no issues found",
        resource_files,
        plural(resource_files, "file", "files"),
        groups,
        plural(groups, "group", "groups"),
        source_files,
        plural(source_files, "file", "files"),
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about files that could not be read.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(
                    result.resource_files_checked,
                    result.groups_checked,
                    result.source_files_checked,
                );
            }
            print_parse_warning(result.parse_error_count, verbose);
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col) = loc.position();

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    if line == 0 {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    } else {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    }

    // Print source context if available
    if let Some(source_line) = loc.source_line() {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let usages = issue.usages();
    if !usages.is_empty() {
        print_usages(usages, writer, max_line_width);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_usages<W: Write>(usages: &[SourceContext], writer: &mut W, max_line_width: usize) {
    let total = usages.len();
    let display_count = total.min(MAX_USAGES_DISPLAY);

    for (i, usage) in usages.iter().take(display_count).enumerate() {
        let is_last = i == display_count - 1;
        let remaining = total.saturating_sub(display_count);
        let suffix = if is_last && remaining > 0 {
            format!(" (and {} more)", remaining)
        } else {
            String::new()
        };

        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}:{}:{}{}",
            "",
            "=".blue(),
            "also used:".bold(),
            usage.file_path(),
            usage.line(),
            usage.col(),
            suffix,
            width = max_line_width
        );
    }
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            plural(total_problems, "problem", "problems"),
            total_errors,
            plural(total_errors, "error", "errors").red(),
            total_warnings,
            plural(total_warnings, "warning", "warnings").yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter(|i| i.location().source_line().is_some())
        .map(|i| i.location().position().1)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
