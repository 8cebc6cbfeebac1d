//! Terminal-related data types for output rendering.

/// Text styling for file listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Directory entries
    Directory,
    /// Regular file entries
    File,
    /// Hidden files
    Hidden,
}

/// A single line of command output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLine {
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
    /// Informational notice that is not a failure
    Info(String),
    /// File listing entry (ls)
    ListEntry {
        name: String,
        style: TextStyle,
        size: Option<u64>,
    },
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::Error(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::Info(s.into())
    }

    /// Create a directory listing entry
    pub fn dir_entry(name: impl Into<String>) -> Self {
        Self::ListEntry {
            name: name.into(),
            style: TextStyle::Directory,
            size: None,
        }
    }

    /// Create a file listing entry
    pub fn file_entry(name: impl Into<String>, size: Option<u64>) -> Self {
        let name = name.into();
        let style = if name.starts_with('.') {
            TextStyle::Hidden
        } else {
            TextStyle::File
        };
        Self::ListEntry { name, style, size }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
