//! Issue types for localization audit results.
//!
//! Every check returns its own issue type. Each issue is self-contained with
//! everything the reporter needs: where it is, what it is about, and how bad
//! it is.

use enum_dispatch::enum_dispatch;

use crate::core::{MessageContext, SourceContext};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DuplicateKey,
    MissingTranslation,
    IdenticalTranslation,
    ValueEqualsKey,
    PlaceholderMismatch,
    UnusedKey,
    GhostKey,
    UnbalancedComment,
    MalformedEntry,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::IdenticalTranslation => write!(f, "identical-translation"),
            Rule::ValueEqualsKey => write!(f, "value-equals-key"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::UnusedKey => write!(f, "unused-key"),
            Rule::GhostKey => write!(f, "ghost-key"),
            Rule::UnbalancedComment => write!(f, "unbalanced-comment"),
            Rule::MalformedEntry => write!(f, "malformed-entry"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Within a locale group
// ============================================================

/// Key assigned more than once in the same resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    /// Location and value of the last assignment (the one that wins).
    pub context: MessageContext,
    pub database: String,
    /// Number of assignments in the file.
    pub count: usize,
}

impl DuplicateKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateKey
    }
}

/// Key present in some databases of a group but not in this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    pub key: String,
    /// Database the key is missing from.
    pub database: String,
    /// Resource file of that database.
    pub file_path: String,
    /// Databases of the same group that define the key.
    pub exists_in: Vec<String>,
}

impl MissingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslation
    }
}

/// Same value for a key in two or more databases (possibly not translated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticalTranslationIssue {
    /// Entry in the first database sharing the value.
    pub context: MessageContext,
    /// Every database sharing the value, in group order.
    pub databases: Vec<String>,
}

impl IdenticalTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::IdenticalTranslation
    }
}

/// Value byte-identical to its key. Sometimes intentional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueEqualsKeyIssue {
    pub context: MessageContext,
    pub database: String,
}

impl ValueEqualsKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ValueEqualsKey
    }
}

/// Placeholder count of one database as compared by the mismatch check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderCount {
    pub database: String,
    pub count: usize,
}

/// Placeholder count differs from the group's baseline database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    /// Entry in the mismatching database (file-level when the key is absent).
    pub context: MessageContext,
    /// The placeholder token that was counted (e.g., "%@").
    pub placeholder: String,
    pub baseline: PlaceholderCount,
    pub actual: PlaceholderCount,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

// ============================================================
// Issue Types - Project wide
// ============================================================

/// Key defined in resource files but never referenced in source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    /// First definition of the key, in group and database order.
    pub context: MessageContext,
    /// Number of databases defining the key.
    pub definitions: usize,
}

impl UnusedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedKey
    }
}

/// Key referenced in source code but defined in no resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhostKeyIssue {
    pub key: String,
    /// First usage site.
    pub context: SourceContext,
    /// Remaining usage sites.
    pub usages: Vec<SourceContext>,
}

impl GhostKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::GhostKey
    }
}

// ============================================================
// Special Issue Types - Load phase
// ============================================================

/// `*/` without an open block comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbalancedCommentIssue {
    pub file_path: String,
    pub line: usize,
}

impl UnbalancedCommentIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnbalancedComment
    }
}

/// Line that looks like an entry but could not be read as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntryIssue {
    pub file_path: String,
    pub line: usize,
    pub original: String,
    /// What remained after trailing-comment removal.
    pub trimmed: String,
}

impl MalformedEntryIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MalformedEntry
    }
}

/// File could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A localization issue found during the audit.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateKey(DuplicateKeyIssue),
    MissingTranslation(MissingTranslationIssue),
    IdenticalTranslation(IdenticalTranslationIssue),
    ValueEqualsKey(ValueEqualsKeyIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    UnusedKey(UnusedKeyIssue),
    GhostKey(GhostKeyIssue),
    UnbalancedComment(UnbalancedCommentIssue),
    MalformedEntry(MalformedEntryIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// Resource file entry (key/value, no source line).
    Message(&'a MessageContext),
    /// A line of a file, without further context.
    Line { path: &'a str, line: usize },
    /// File-level only.
    File { path: &'a str },
}

impl<'a> ReportLocation<'a> {
    /// `(path, line, col)`; line and col are 0 for file-level locations.
    pub fn position(&self) -> (&'a str, usize, usize) {
        match *self {
            ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::Line { path, line } => (path, line, 1),
            ReportLocation::File { path } => (path, 0, 0),
        }
    }

    /// Source line to quote under the location, if any.
    pub fn source_line(&self) -> Option<&'a str> {
        match *self {
            ReportLocation::Source(ctx) => Some(&ctx.source_line),
            _ => None,
        }
    }
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the calls
/// from the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Additional usage locations in source code.
    fn usages(&self) -> &[SourceContext] {
        &[]
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for DuplicateKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "assigned {} times in {}, last value wins",
            self.count, self.database
        ))
    }
}

impl Report for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "missing from {}, exists in: {}",
            self.database,
            self.exists_in.join(", ")
        ))
    }
}

impl Report for IdenticalTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "same translation (\"{}\") in: {}",
            self.context.value,
            self.databases.join(", ")
        ))
    }
}

impl Report for ValueEqualsKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("translation equals the key; intentional?")
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {}", self.database))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "\"{}\" count: {} = {}, {} = {}",
            self.placeholder,
            self.baseline.database,
            self.baseline.count,
            self.actual.database,
            self.actual.count
        ))
    }
}

impl Report for UnusedKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") defined in {} file(s), never referenced in source code",
            self.context.value, self.definitions
        ))
    }
}

impl Report for GhostKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("not defined in any resource file".to_string())
    }

    fn usages(&self) -> &[SourceContext] {
        &self.usages
    }
}

impl Report for UnbalancedCommentIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Line {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        "*/".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("block comment end without a matching start".to_string())
    }
}

impl Report for MalformedEntryIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Line {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.original.trim().to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("a \"//\" inside a value is read as a comment")
    }

    fn details(&self) -> Option<String> {
        Some(format!("probably trimmed too much: {}", self.trimmed))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
