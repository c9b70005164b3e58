//! Value-equals-key detection rule.
//!
//! Flags entries whose translation is the key itself, e.g.
//! `"Cancel" = "Cancel";`. This is often a placeholder left behind, but it
//! can be deliberate, so the rule only warns.

use crate::{
    core::{LocaleGroup, MessageContext},
    issues::ValueEqualsKeyIssue,
};

pub fn check_value_equals_key(group: &LocaleGroup) -> Vec<ValueEqualsKeyIssue> {
    let mut issues: Vec<ValueEqualsKeyIssue> = group
        .databases
        .iter()
        .flat_map(|db| {
            db.entries
                .iter()
                .filter(|(key, line)| **key == line.text)
                .map(move |(key, line)| ValueEqualsKeyIssue {
                    context: MessageContext::new(
                        db.location_of(key),
                        key.clone(),
                        line.text.clone(),
                    ),
                    database: db.name.clone(),
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
