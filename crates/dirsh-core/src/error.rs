//! Error types for the shell core.
//!
//! - [`ParseError`] - syntax errors on an input line
//! - [`DirectoryError`] - directory cursor movements that were refused

use std::path::PathBuf;

use thiserror::Error;

/// Structured error type for tokenizing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `"` was opened but never closed: `mkdir "a b`
    ///
    /// `position` counts characters, not bytes, up to the opening quote.
    #[error("syntax error at column {}: quotation marks not closed", .position + 1)]
    UnterminatedQuote { position: usize },
}

/// Refused movements of the directory cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// Target is missing, or exists but is not a directory.
    #[error("directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },
    /// Back-navigation requested at the filesystem root.
    #[error("already at the root directory")]
    AlreadyAtRoot,
    /// Starting directory cannot be represented as UTF-8 text.
    #[error("path is not valid unicode: {}", .path.display())]
    NotUnicode { path: PathBuf },
}
