//! Identical translation detection rule.
//!
//! Detects keys whose value is shared verbatim by two or more databases of a
//! locale group, which usually means a string was copied in and never
//! translated.

use std::collections::BTreeMap;

use crate::{
    core::{LocaleGroup, MessageContext},
    issues::IdenticalTranslationIssue,
};

/// Check a group for values shared by several databases.
///
/// One issue per (key, shared value). Databases are listed in group order.
pub fn check_identical_translations(group: &LocaleGroup) -> Vec<IdenticalTranslationIssue> {
    let mut issues = Vec::new();

    for key in group.all_keys() {
        let mut by_value: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (index, db) in group.databases.iter().enumerate() {
            if let Some(value) = db.value(key) {
                by_value.entry(value).or_default().push(index);
            }
        }

        for (value, indices) in by_value {
            if indices.len() < 2 {
                continue;
            }

            let first = &group.databases[indices[0]];
            issues.push(IdenticalTranslationIssue {
                context: MessageContext::new(first.location_of(key), key, value),
                databases: indices
                    .iter()
                    .map(|i| group.databases[*i].name.clone())
                    .collect(),
            });
        }
    }

    issues
}
