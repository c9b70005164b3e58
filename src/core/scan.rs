use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use super::parsers::strings::locale_folder;
use crate::config::Config;

/// A discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub path: PathBuf,
    /// Path relative to the audited folder, with `/` separators.
    pub display_path: String,
}

/// Result of scanning the audited folder.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Resource files inside a locale folder, sorted by path.
    pub resource_files: Vec<ProjectFile>,
    /// Source files, sorted by path.
    pub source_files: Vec<ProjectFile>,
    /// Resource files outside any locale folder; not audited.
    pub unlocalized_files: Vec<ProjectFile>,
    pub skipped_count: usize,
}

pub fn scan_project(root: &Path, config: &Config, verbose: bool) -> ScanResult {
    let mut result = ScanResult::default();

    let mut ignore_patterns: Vec<Pattern> = Vec::new();
    for p in &config.ignores {
        match Pattern::new(p) {
            Ok(pattern) => ignore_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let display_path = display_path(root, path);
        if ignore_patterns.iter().any(|p| p.matches(&display_path)) {
            continue;
        }

        let file = ProjectFile {
            path: path.to_path_buf(),
            display_path,
        };
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext == config.resource_extension => {
                if locale_folder(&file.display_path, &config.locale_folder_suffix).is_some() {
                    result.resource_files.push(file);
                } else {
                    result.unlocalized_files.push(file);
                }
            }
            Some(ext) if config.source_extensions.iter().any(|s| s == ext) => {
                result.source_files.push(file);
            }
            _ => {}
        }
    }

    result
}

/// Name of the locale group a resource file belongs to.
///
/// Same-named files in the locale folders of one directory form a group:
/// "App/en.lproj/Localizable.strings" and "App/fr.lproj/Localizable.strings"
/// both belong to "App/Localizable.strings".
pub fn group_name(display_path: &str, suffix: &str) -> String {
    let segments: Vec<&str> = display_path.split('/').collect();
    match segments.iter().position(|s| s.ends_with(suffix)) {
        Some(index) => segments[..index]
            .iter()
            .chain(&segments[index + 1..])
            .copied()
            .collect::<Vec<_>>()
            .join("/"),
        None => display_path.to_string(),
    }
}

fn display_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
