use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        check_duplicate_keys, check_ghost_keys, check_identical_translations,
        check_missing_translations, check_placeholder_mismatch, check_unused_keys,
        check_value_equals_key,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Duplicate,
    Missing,
    Identical,
    ValueEqualsKey,
    Placeholder,
    Unused,
    Ghost,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Duplicate,
            CheckRule::Missing,
            CheckRule::Identical,
            CheckRule::ValueEqualsKey,
            CheckRule::Placeholder,
            CheckRule::Unused,
            CheckRule::Ghost,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.target(), &cmd.common)?;

    let checks = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules.clone()
    };

    Ok(finish(
        CommandSummary::Check,
        run_checks(&ctx, &checks),
        ctx.resource_files_checked,
        ctx.groups.len(),
        ctx.source_files_checked,
    ))
}

/// Run the selected rules over a loaded context.
///
/// Load-phase issues are always included.
pub fn run_checks(ctx: &CheckContext, checks: &[CheckRule]) -> Vec<Issue> {
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Duplicate => {
                for group in &ctx.groups {
                    let issues = check_duplicate_keys(group);
                    all_issues.extend(issues.into_iter().map(Issue::DuplicateKey));
                }
            }
            CheckRule::Missing => {
                for group in &ctx.groups {
                    let issues = check_missing_translations(group);
                    all_issues.extend(issues.into_iter().map(Issue::MissingTranslation));
                }
            }
            CheckRule::Identical => {
                for group in &ctx.groups {
                    let issues = check_identical_translations(group);
                    all_issues.extend(issues.into_iter().map(Issue::IdenticalTranslation));
                }
            }
            CheckRule::ValueEqualsKey => {
                for group in &ctx.groups {
                    let issues = check_value_equals_key(group);
                    all_issues.extend(issues.into_iter().map(Issue::ValueEqualsKey));
                }
            }
            CheckRule::Placeholder => {
                for group in &ctx.groups {
                    let issues = check_placeholder_mismatch(group, &ctx.config.placeholder);
                    all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
                }
            }
            CheckRule::Unused => {
                let issues = check_unused_keys(&ctx.groups, &ctx.used_keys);
                all_issues.extend(issues.into_iter().map(Issue::UnusedKey));
            }
            CheckRule::Ghost => {
                let issues = check_ghost_keys(&ctx.groups, &ctx.used_keys);
                all_issues.extend(issues.into_iter().map(Issue::GhostKey));
            }
        }
    }

    all_issues.extend(ctx.load_issues.iter().cloned());
    all_issues
}
