use std::collections::{BTreeSet, HashMap};

use super::MessageLocation;

/// One physical line of a file, with its original 1-based position.
///
/// For resource entries the text is the extracted value and the number is
/// the line of the assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

impl Line {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// One language's resource file, fully loaded.
///
/// `entries` holds the last value assigned to each key, `duplicate_counts`
/// the number of assignments (at least 1 for every key present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDatabase {
    /// Locale-folder name with its parent (e.g., "Resources/en.lproj").
    pub name: String,
    /// Locale code (e.g., "en", "pt-BR", "Base").
    pub locale: String,
    /// Path of the resource file, relative to the audited folder.
    pub file_path: String,
    pub entries: HashMap<String, Line>,
    pub duplicate_counts: HashMap<String, usize>,
}

impl ResourceDatabase {
    pub fn new(
        name: impl Into<String>,
        locale: impl Into<String>,
        file_path: impl Into<String>,
        entries: HashMap<String, Line>,
        duplicate_counts: HashMap<String, usize>,
    ) -> Self {
        Self {
            name: name.into(),
            locale: locale.into(),
            file_path: file_path.into(),
            entries,
            duplicate_counts,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Line> {
        self.entries.get(key)
    }

    /// Stored value for a key (the last assignment).
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|line| line.text.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Number of assignments of `key` in the file (0 if absent).
    pub fn duplicate_count(&self, key: &str) -> usize {
        self.duplicate_counts.get(key).copied().unwrap_or(0)
    }

    /// Location of the entry for `key`, or of the file when the key is absent.
    pub fn location_of(&self, key: &str) -> MessageLocation {
        match self.entries.get(key) {
            Some(line) => MessageLocation::with_line(&self.file_path, line.number),
            None => MessageLocation::file(&self.file_path),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The same logical string table across languages: one database per
/// locale folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleGroup {
    /// Unique within a run (e.g., "App/Resources/Localizable.strings").
    pub name: String,
    /// Ordered; the first database is the baseline for comparisons.
    pub databases: Vec<ResourceDatabase>,
}

impl LocaleGroup {
    pub fn new(name: impl Into<String>, databases: Vec<ResourceDatabase>) -> Self {
        Self {
            name: name.into(),
            databases,
        }
    }

    /// Create a group with the primary locale first and the rest sorted by name.
    pub fn with_primary(
        name: impl Into<String>,
        mut databases: Vec<ResourceDatabase>,
        primary_locale: &str,
    ) -> Self {
        databases.sort_by(|a, b| {
            (a.locale != primary_locale, &a.name).cmp(&(b.locale != primary_locale, &b.name))
        });
        Self::new(name, databases)
    }

    /// Union of the keys of every database in the group, sorted.
    pub fn all_keys(&self) -> BTreeSet<&str> {
        self.databases
            .iter()
            .flat_map(|db| db.keys().map(String::as_str))
            .collect()
    }

    /// The baseline database for cross-language comparisons.
    pub fn baseline(&self) -> Option<&ResourceDatabase> {
        self.databases.first()
    }
}

/// Union of the keys of every group in the project, sorted.
pub fn project_keys(groups: &[LocaleGroup]) -> BTreeSet<&str> {
    groups.iter().flat_map(LocaleGroup::all_keys).collect()
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::fixtures::{database, group};
    use super::*;

    #[test]
    fn test_all_keys_is_sorted_union() {
        let group = group(vec![
            database("en", &[("b", "B"), ("a", "A")]),
            database("fr", &[("c", "C"), ("a", "A")]),
        ]);
        assert_eq!(group.all_keys().into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_with_primary_orders_primary_first() {
        let group = LocaleGroup::with_primary(
            "Resources/Localizable.strings",
            vec![
                database("fr", &[]),
                database("de", &[]),
                database("en", &[]),
            ],
            "en",
        );
        let locales: Vec<&str> = group.databases.iter().map(|d| d.locale.as_str()).collect();
        assert_eq!(locales, vec!["en", "de", "fr"]);
    }

    #[test]
    fn test_with_primary_missing_primary_sorts_by_name() {
        let group = LocaleGroup::with_primary(
            "Localizable.strings",
            vec![database("fr", &[]), database("de", &[])],
            "en",
        );
        assert_eq!(group.baseline().map(|d| d.locale.as_str()), Some("de"));
    }

    #[test]
    fn test_location_of_missing_key_points_at_file() {
        let db = database("en", &[("a", "A")]);
        assert_eq!(db.location_of("a").line, 1);
        assert_eq!(
            db.location_of("zzz"),
            MessageLocation::file("Resources/en.lproj/Localizable.strings")
        );
        assert_eq!(db.duplicate_count("zzz"), 0);
    }

    #[test]
    fn test_project_keys_spans_groups() {
        let groups = vec![
            LocaleGroup::new("A/Localizable.strings", vec![database("en", &[("x", "X")])]),
            LocaleGroup::new("B/Localizable.strings", vec![database("en", &[("y", "Y")])]),
        ];
        assert_eq!(
            project_keys(&groups).into_iter().collect::<Vec<_>>(),
            vec!["x", "y"]
        );
    }
}
