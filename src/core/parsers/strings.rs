use std::{
    collections::HashMap,
    fs,
    path::{Component, Path},
};

use anyhow::{Context, Result};

use super::comment::{CommentDepth, CommentWarning, LINE_COMMENT, parse_lines};
use crate::core::{Line, ResourceDatabase};

/// Separator between key and value in `"key" = "value";`.
pub const ASSIGNMENT: &str = " = ";
/// Statement terminator that every entry line must end with.
pub const TERMINATOR: char = ';';

/// Characters trimmed from both ends of a key or a value.
const TRIM_CHARS: &[char] = &[';', '"'];

/// A line that looked like an entry but lost its terminator after
/// trailing-comment removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryWarning {
    pub line: usize,
    /// The line as written in the file.
    pub original: String,
    /// What was left after trimming.
    pub trimmed: String,
}

/// Key/value pairs of one resource file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExtractedEntries {
    /// Last value assigned to each key, with the line of that assignment.
    pub entries: HashMap<String, Line>,
    /// Number of assignments per key.
    pub duplicate_counts: HashMap<String, usize>,
    pub warnings: Vec<EntryWarning>,
}

/// A loaded resource file plus the non-fatal anomalies found while parsing it.
#[derive(Debug)]
pub struct ParsedStringsFile {
    pub database: ResourceDatabase,
    pub comment_warnings: Vec<CommentWarning>,
    pub entry_warnings: Vec<EntryWarning>,
}

/// Extract `"key" = "value";` pairs from comment-stripped lines.
///
/// Lines that are not assignments are skipped. A key assigned several times
/// keeps its last value and counts every assignment.
pub fn extract_entries(lines: &[Line]) -> ExtractedEntries {
    let mut result = ExtractedEntries::default();

    for line in lines {
        let trimmed = line.text.trim();
        if trimmed.is_empty() || trimmed.starts_with(LINE_COMMENT) {
            continue;
        }

        let code = match trimmed.find(LINE_COMMENT) {
            Some(pos) => trimmed[..pos].trim(),
            None => trimmed,
        };

        if !code.ends_with(TERMINATOR) {
            if line.text.contains('"') {
                result.warnings.push(EntryWarning {
                    line: line.number,
                    original: line.text.clone(),
                    trimmed: code.to_string(),
                });
            }
            continue;
        }

        let parts: Vec<&str> = code.split(ASSIGNMENT).collect();
        let [key, value] = parts.as_slice() else {
            continue;
        };

        let key = key.trim_matches(TRIM_CHARS).to_string();
        let value = value.trim_matches(TRIM_CHARS);

        *result.duplicate_counts.entry(key.clone()).or_insert(0) += 1;
        result.entries.insert(key, Line::new(line.number, value));
    }

    result
}

/// Locale-folder segment of a path, combined with its parent segment.
///
/// Returns `(name, locale)`:
/// - "Resources/en.lproj/Localizable.strings" -> ("Resources/en.lproj", "en")
/// - "fr.lproj/Localizable.strings" -> ("fr.lproj", "fr")
pub fn locale_folder(path: impl AsRef<Path>, suffix: &str) -> Option<(String, String)> {
    let segments: Vec<String> = path
        .as_ref()
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    let index = segments.iter().position(|s| s.ends_with(suffix))?;
    let folder = &segments[index];
    let locale = folder.strip_suffix(suffix).unwrap_or(folder).to_string();
    let name = match index.checked_sub(1) {
        Some(parent) => format!("{}/{}", segments[parent], folder),
        None => folder.clone(),
    };

    Some((name, locale))
}

/// Parse resource file content into a database.
///
/// `display_path` is the path used in diagnostics and for locale naming.
pub fn parse_strings_content(
    content: &str,
    display_path: &str,
    suffix: &str,
    max_depth: CommentDepth,
) -> ParsedStringsFile {
    let stripped = parse_lines(content, max_depth);
    let extracted = extract_entries(&stripped.lines);

    let (name, locale) = locale_folder(display_path, suffix)
        .unwrap_or_else(|| (display_path.to_string(), display_path.to_string()));

    ParsedStringsFile {
        database: ResourceDatabase::new(
            name,
            locale,
            display_path,
            extracted.entries,
            extracted.duplicate_counts,
        ),
        comment_warnings: stripped.warnings,
        entry_warnings: extracted.warnings,
    }
}

/// Read and parse one `.strings` file.
pub fn parse_strings_file(
    path: &Path,
    display_path: &str,
    suffix: &str,
    max_depth: CommentDepth,
) -> Result<ParsedStringsFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read strings file: {:?}", path))?;

    Ok(parse_strings_content(
        &content,
        display_path,
        suffix,
        max_depth,
    ))
}
