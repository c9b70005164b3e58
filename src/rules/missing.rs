//! Missing translation detection rule.
//!
//! Detects keys defined in some databases of a locale group but absent from
//! others. Each report names the databases that do define the key.

use crate::{core::LocaleGroup, issues::MissingTranslationIssue};

/// Check each database of a group against the union of the group's keys.
///
/// A key missing from every database cannot be reported, since it is not
/// part of the union.
pub fn check_missing_translations(group: &LocaleGroup) -> Vec<MissingTranslationIssue> {
    let all_keys = group.all_keys();
    let mut issues = Vec::new();

    for db in &group.databases {
        for key in all_keys.iter().filter(|key| !db.contains_key(key)) {
            let exists_in = group
                .databases
                .iter()
                .filter(|other| other.contains_key(key))
                .map(|other| other.name.clone())
                .collect();

            issues.push(MissingTranslationIssue {
                key: key.to_string(),
                database: db.name.clone(),
                file_path: db.file_path.clone(),
                exists_in,
            });
        }
    }

    issues
}
