use std::collections::BTreeMap;

use super::SourceContext;

/// Keys referenced from source code, with every site that references them.
///
/// Collected once during the load phase and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedKeys {
    usages: BTreeMap<String, Vec<SourceContext>>,
}

impl UsedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, context: SourceContext) {
        self.usages.entry(key.into()).or_default().push(context);
    }

    /// Merge another set into this one, keeping usage sites sorted by location.
    pub fn extend(&mut self, other: UsedKeys) {
        for (key, contexts) in other.usages {
            let sites = self.usages.entry(key).or_default();
            sites.extend(contexts);
            sites.sort_by(|a, b| a.location.cmp(&b.location));
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.usages.contains_key(key)
    }

    /// All referenced keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.usages.keys().map(String::as_str)
    }

    /// Usage sites of `key`, empty if the key is never referenced.
    pub fn usages(&self, key: &str) -> &[SourceContext] {
        self.usages.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.usages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, SourceContext)> for UsedKeys {
    fn from_iter<I: IntoIterator<Item = (K, SourceContext)>>(iter: I) -> Self {
        let mut used = UsedKeys::new();
        for (key, context) in iter {
            used.insert(key, context);
        }
        used
    }
}
