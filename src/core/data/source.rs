/// Pure position information in source code files (Swift).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Position with context information in source code files.
///
/// Carries the source line so the reporter can print it with a caret
/// under the referenced key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    /// The source code line content for display.
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
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
