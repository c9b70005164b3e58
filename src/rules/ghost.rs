//! Ghost key detection rule.
//!
//! Detects keys referenced from source code that no resource file defines.
//! At runtime such a lookup falls back to the key itself.

use crate::{
    core::{LocaleGroup, UsedKeys, project_keys},
    issues::GhostKeyIssue,
};

pub fn check_ghost_keys(groups: &[LocaleGroup], used_keys: &UsedKeys) -> Vec<GhostKeyIssue> {
    let defined = project_keys(groups);

    used_keys
        .keys()
        .filter(|key| !defined.contains(key))
        .filter_map(|key| {
            let (first, rest) = used_keys.usages(key).split_first()?;
            Some(GhostKeyIssue {
                key: key.to_string(),
                context: first.clone(),
                usages: rest.to_vec(),
            })
        })
        .collect()
}
