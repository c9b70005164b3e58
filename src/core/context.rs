//! Load phase: everything the rules need, materialized up front.
//!
//! `CheckContext::new` discovers files, parses every resource and source file
//! (in parallel), and groups the resulting databases. Once it returns, all
//! data is immutable and the rules can run in any order.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use colored::Colorize;
use rayon::prelude::*;

use super::{
    LocaleGroup, ResourceDatabase, UsedKeys,
    parsers::{
        comment::CommentWarning,
        strings::{EntryWarning, parse_strings_file},
        usage::{compile_usage_pattern, extract_usages_from_file},
    },
    scan::{ProjectFile, group_name, scan_project},
};
use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    issues::{Issue, MalformedEntryIssue, ParseErrorIssue, UnbalancedCommentIssue},
};

pub struct CheckContext {
    pub config: Config,
    /// The audited folder.
    pub root_dir: PathBuf,
    pub groups: Vec<LocaleGroup>,
    pub used_keys: UsedKeys,
    pub resource_files_checked: usize,
    pub source_files_checked: usize,
    /// Non-fatal problems found while loading (unreadable files, comment
    /// anomalies, malformed entries).
    pub load_issues: Vec<Issue>,
    pub verbose: bool,
}

impl CheckContext {
    /// Build the check context for the folder at `root_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `root_dir` does not exist or is not a directory
    /// - Config file is invalid
    pub fn new(root_dir: &Path, common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        if !root_dir.exists() {
            bail!("Folder '{}' does not exist.", root_dir.display());
        }
        if !root_dir.is_dir() {
            bail!("'{}' is not a directory.", root_dir.display());
        }

        let config_result = load_config(root_dir)?;
        if verbose {
            match &config_result.path {
                Some(path) => eprintln!("{} Using config {}", "note:".bold(), path.display()),
                None => eprintln!(
                    "{} No config file found, using default configuration",
                    "note:".bold()
                ),
            }
        }

        let mut config = config_result.config;

        // CLI > config file > defaults
        if let Some(ref primary_locale) = common_args.primary_locale {
            config.primary_locale = primary_locale.clone();
        }

        let scan = scan_project(root_dir, &config, verbose);
        if scan.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }
        if verbose {
            for file in &scan.unlocalized_files {
                eprintln!(
                    "{} {} is not inside a '*{}' folder, skipped",
                    "note:".bold(),
                    file.display_path,
                    config.locale_folder_suffix
                );
            }
        }

        let mut load_issues = Vec::new();
        let groups = load_groups(&scan.resource_files, &config, &mut load_issues);
        let used_keys = load_used_keys(&scan.source_files, &config, &mut load_issues)?;

        if verbose {
            for issue in &load_issues {
                if let Issue::ParseError(e) = issue {
                    eprintln!(
                        "{} {}: {}",
                        "warning:".bold().yellow(),
                        e.file_path,
                        e.error
                    );
                }
            }
        }

        Ok(Self {
            config,
            root_dir: root_dir.to_path_buf(),
            groups,
            used_keys,
            resource_files_checked: scan.resource_files.len(),
            source_files_checked: scan.source_files.len(),
            load_issues,
            verbose,
        })
    }
}

/// Parse every resource file and group the databases.
///
/// Files are parsed in parallel; grouping starts only once all of them are
/// done.
fn load_groups(
    files: &[ProjectFile],
    config: &Config,
    issues: &mut Vec<Issue>,
) -> Vec<LocaleGroup> {
    let suffix = config.locale_folder_suffix.as_str();
    let depth = config.comment_depth();

    let results: Vec<_> = files
        .par_iter()
        .map(|file| {
            (
                file,
                parse_strings_file(&file.path, &file.display_path, suffix, depth),
            )
        })
        .collect();

    let mut by_group: BTreeMap<String, Vec<ResourceDatabase>> = BTreeMap::new();
    for (file, result) in results {
        match result {
            Ok(parsed) => {
                push_comment_issues(issues, &file.display_path, &parsed.comment_warnings);
                push_entry_issues(issues, &file.display_path, parsed.entry_warnings);
                by_group
                    .entry(group_name(&file.display_path, suffix))
                    .or_default()
                    .push(parsed.database);
            }
            Err(e) => issues.push(parse_error(file, &e)),
        }
    }

    by_group
        .into_iter()
        .map(|(name, databases)| LocaleGroup::with_primary(name, databases, &config.primary_locale))
        .collect()
}

/// Collect the keys referenced by every source file.
fn load_used_keys(
    files: &[ProjectFile],
    config: &Config,
    issues: &mut Vec<Issue>,
) -> Result<UsedKeys> {
    let pattern = compile_usage_pattern(&config.usage_pattern)?;
    let depth = config.comment_depth();

    let results: Vec<_> = files
        .par_iter()
        .map(|file| {
            (
                file,
                extract_usages_from_file(&file.path, &file.display_path, &pattern, depth),
            )
        })
        .collect();

    let mut used_keys = UsedKeys::new();
    for (file, result) in results {
        match result {
            Ok(extracted) => {
                push_comment_issues(issues, &file.display_path, &extracted.comment_warnings);
                used_keys.extend(extracted.used_keys);
            }
            Err(e) => issues.push(parse_error(file, &e)),
        }
    }

    Ok(used_keys)
}

fn push_comment_issues(issues: &mut Vec<Issue>, file_path: &str, warnings: &[CommentWarning]) {
    issues.extend(warnings.iter().map(|w| {
        Issue::UnbalancedComment(UnbalancedCommentIssue {
            file_path: file_path.to_string(),
            line: w.line,
        })
    }));
}

fn push_entry_issues(issues: &mut Vec<Issue>, file_path: &str, warnings: Vec<EntryWarning>) {
    issues.extend(warnings.into_iter().map(|w| {
        Issue::MalformedEntry(MalformedEntryIssue {
            file_path: file_path.to_string(),
            line: w.line,
            original: w.original,
            trimmed: w.trimmed,
        })
    }));
}

fn parse_error(file: &ProjectFile, error: &anyhow::Error) -> Issue {
    Issue::ParseError(ParseErrorIssue {
        file_path: file.display_path.clone(),
        error: format!("{:#}", error),
    })
}
