//! Unused key detection rule.
//!
//! Detects keys defined in any locale group but never referenced from
//! source code. Reported once per key for the whole project, pointing at the
//! first definition.

use crate::{
    core::{LocaleGroup, MessageContext, UsedKeys, project_keys},
    issues::UnusedKeyIssue,
};

pub fn check_unused_keys(groups: &[LocaleGroup], used_keys: &UsedKeys) -> Vec<UnusedKeyIssue> {
    let mut issues = Vec::new();

    for key in project_keys(groups) {
        if used_keys.contains(key) {
            continue;
        }

        let mut definitions = groups
            .iter()
            .flat_map(|group| &group.databases)
            .filter(|db| db.contains_key(key));
        let Some(first) = definitions.next() else {
            continue;
        };

        issues.push(UnusedKeyIssue {
            context: MessageContext::new(
                first.location_of(key),
                key,
                first.value(key).unwrap_or_default(),
            ),
            definitions: 1 + definitions.count(),
        });
    }

    issues
}
