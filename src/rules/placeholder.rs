//! Placeholder count mismatch detection rule.
//!
//! Compares how many times the placeholder token (`%@` by default) appears
//! in each translation of a key. The first database of the group is the
//! baseline; every other database with a different count is reported. A
//! missing key counts as zero placeholders.

use crate::{
    core::{LocaleGroup, MessageContext},
    issues::{PlaceholderCount, PlaceholderMismatchIssue},
};

/// Non-overlapping occurrences of `placeholder` in `value`.
pub fn count_placeholders(value: &str, placeholder: &str) -> usize {
    if placeholder.is_empty() {
        return 0;
    }
    value.matches(placeholder).count()
}

pub fn check_placeholder_mismatch(
    group: &LocaleGroup,
    placeholder: &str,
) -> Vec<PlaceholderMismatchIssue> {
    let Some(baseline_db) = group.baseline() else {
        return Vec::new();
    };
    let count_in =
        |value: Option<&str>| value.map_or(0, |value| count_placeholders(value, placeholder));
    let mut issues = Vec::new();

    for key in group.all_keys() {
        let baseline = count_in(baseline_db.value(key));

        for db in group.databases.iter().skip(1) {
            let value = db.value(key);
            let count = count_in(value);
            if count == baseline {
                continue;
            }

            issues.push(PlaceholderMismatchIssue {
                context: MessageContext::new(
                    db.location_of(key),
                    key,
                    value.unwrap_or_default(),
                ),
                placeholder: placeholder.to_string(),
                baseline: PlaceholderCount {
                    database: baseline_db.name.clone(),
                    count: baseline,
                },
                actual: PlaceholderCount {
                    database: db.name.clone(),
                    count,
                },
            });
        }
    }

    issues
}
