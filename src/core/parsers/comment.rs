//! Comment stripping for `.strings` and Swift files.
//!
//! Works on whole physical lines: a line is either kept untouched or dropped.
//! Block comments are tracked with a single depth counter so that comments
//! spanning many lines, and nested comments, are removed in one pass.

use crate::core::Line;

pub const LINE_COMMENT: &str = "//";
pub const BLOCK_COMMENT_START: &str = "/*";
pub const BLOCK_COMMENT_END: &str = "*/";

/// UTF-8 byte-order mark some editors write at the start of a file.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// How many nested block comments to honor.
///
/// A `/*` past the limit is treated as ordinary text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentDepth {
    #[default]
    Unlimited,
    Limited(usize),
}

impl CommentDepth {
    fn allows(self, depth: usize) -> bool {
        match self {
            CommentDepth::Unlimited => true,
            CommentDepth::Limited(max) => depth < max,
        }
    }
}

impl From<Option<usize>> for CommentDepth {
    fn from(value: Option<usize>) -> Self {
        value.map_or(CommentDepth::Unlimited, CommentDepth::Limited)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentWarningKind {
    /// `*/` found while no block comment was open.
    UnbalancedEnd,
}

impl std::fmt::Display for CommentWarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentWarningKind::UnbalancedEnd => write!(f, "unbalanced block comment end"),
        }
    }
}

/// A non-fatal comment anomaly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWarning {
    pub line: usize,
    pub kind: CommentWarningKind,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct StrippedLines {
    pub lines: Vec<Line>,
    pub warnings: Vec<CommentWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Start,
    End,
}

/// Split file content into numbered physical lines.
///
/// A leading byte-order mark is not part of the first line.
pub fn split_lines(content: &str) -> Vec<Line> {
    content
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(content)
        .lines()
        .enumerate()
        .map(|(i, text)| Line::new(i + 1, text))
        .collect()
}

/// Remove blank lines, `//` lines and block-commented lines.
///
/// The output is a fixed point: stripping it again removes nothing.
pub fn strip_comments(lines: Vec<Line>, max_depth: CommentDepth) -> StrippedLines {
    let mut result = StrippedLines::default();
    let mut depth = 0usize;

    for line in lines {
        let trimmed = line.text.trim();
        if trimmed.is_empty() || trimmed.starts_with(LINE_COMMENT) {
            continue;
        }

        let inside = depth > 0;
        let mut touched = false;
        // Openers past the limit on this line; a closer pairs with them first.
        let mut ignored_starts = 0usize;

        for marker in markers(trimmed) {
            match marker {
                Marker::Start if max_depth.allows(depth) => {
                    depth += 1;
                    touched = true;
                }
                Marker::Start => ignored_starts += 1,
                Marker::End if ignored_starts > 0 => ignored_starts -= 1,
                Marker::End => {
                    if depth > 0 {
                        depth -= 1;
                    } else {
                        result.warnings.push(CommentWarning {
                            line: line.number,
                            kind: CommentWarningKind::UnbalancedEnd,
                        });
                    }
                    touched = true;
                }
            }
        }

        if inside || touched || depth > 0 {
            continue;
        }
        result.lines.push(line);
    }

    result
}

/// Read file content and strip comments in one go.
pub fn parse_lines(content: &str, max_depth: CommentDepth) -> StrippedLines {
    strip_comments(split_lines(content), max_depth)
}

/// Block-comment markers of a line, left to right, non-overlapping.
fn markers(text: &str) -> Vec<Marker> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'/', b'*') => {
                found.push(Marker::Start);
                i += 2;
            }
            (b'*', b'/') => {
                found.push(Marker::End);
                i += 2;
            }
            _ => i += 1,
        }
    }
    found
}
