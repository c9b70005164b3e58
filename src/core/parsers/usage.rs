use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use regex::Regex;

use super::comment::{CommentDepth, CommentWarning, parse_lines};
use crate::core::{SourceContext, SourceLocation, UsedKeys};

/// Default reference pattern: `"key".localized`.
pub const DEFAULT_USAGE_PATTERN: &str = r#""(\w+)"\.localized"#;

/// Keys referenced by one source file.
#[derive(Debug, Default)]
pub struct ExtractedUsages {
    pub used_keys: UsedKeys,
    pub comment_warnings: Vec<CommentWarning>,
}

/// Compile a usage pattern, requiring a capture group for the key.
pub fn compile_usage_pattern(pattern: &str) -> Result<Regex> {
    let regex = Regex::new(pattern)
        .with_context(|| format!("Invalid usage pattern: \"{}\"", pattern))?;
    if regex.captures_len() < 2 {
        bail!(
            "Usage pattern \"{}\" has no capture group for the key",
            pattern
        );
    }
    Ok(regex)
}

/// Collect every key reference in source text.
///
/// Commented-out code is stripped first. Every match on a line is captured,
/// not only the first. Keys built at runtime (concatenation, interpolation)
/// are not detected.
pub fn extract_usages(
    source: &str,
    file_path: &str,
    pattern: &Regex,
    max_depth: CommentDepth,
) -> ExtractedUsages {
    let stripped = parse_lines(source, max_depth);
    let mut used_keys = UsedKeys::new();

    for line in &stripped.lines {
        for captures in pattern.captures_iter(&line.text) {
            let Some(key) = captures.get(1) else {
                continue;
            };
            let col = line.text[..key.start()].chars().count() + 1;
            used_keys.insert(
                key.as_str(),
                SourceContext::new(
                    SourceLocation::new(file_path, line.number, col),
                    line.text.as_str(),
                ),
            );
        }
    }

    ExtractedUsages {
        used_keys,
        comment_warnings: stripped.warnings,
    }
}

/// Read one source file and collect its key references.
pub fn extract_usages_from_file(
    path: &Path,
    display_path: &str,
    pattern: &Regex,
    max_depth: CommentDepth,
) -> Result<ExtractedUsages> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {:?}", path))?;
    Ok(extract_usages(&source, display_path, pattern, max_depth))
}
