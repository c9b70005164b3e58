/// Position information in resource files (`.strings`).
///
/// Used for error reporting when a finding is tied to a translation entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the resource file, relative to the audited folder
    /// (e.g., "Resources/en.lproj/Localizable.strings").
    pub file_path: String,
    /// Line number (1-indexed). 0 when the finding concerns the whole file.
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }

    /// Location pointing at a file as a whole.
    pub fn file(file_path: impl Into<String>) -> Self {
        Self::new(file_path, 0, 0)
    }
}

/// Position with context information in resource files.
///
/// Contains the key and value at this location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// The translation key (e.g., "greeting").
    pub key: String,
    /// The translation value.
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
