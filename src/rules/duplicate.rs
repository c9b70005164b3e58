//! Duplicate key detection rule.
//!
//! Detects keys assigned more than once in the same resource file. Only the
//! last assignment survives, so the earlier ones are dead text at best and a
//! silent override at worst.

use crate::{
    core::{LocaleGroup, MessageContext},
    issues::DuplicateKeyIssue,
};

/// Check every database of a group for keys with more than one assignment.
pub fn check_duplicate_keys(group: &LocaleGroup) -> Vec<DuplicateKeyIssue> {
    let mut issues: Vec<DuplicateKeyIssue> = group
        .databases
        .iter()
        .flat_map(|db| {
            db.duplicate_counts
                .iter()
                .filter(|(_, count)| **count > 1)
                .map(move |(key, count)| DuplicateKeyIssue {
                    context: MessageContext::new(
                        db.location_of(key),
                        key.clone(),
                        db.value(key).unwrap_or_default(),
                    ),
                    database: db.name.clone(),
                    count: *count,
                })
        })
        .collect();

    issues.sort_by(|a, b| {
        a.context
            .location
            .cmp(&b.context.location)
            .then_with(|| a.context.key.cmp(&b.context.key))
    });

    issues
}
