//! Error types for command execution.
//!
//! Every error here is recoverable: the REPL reports it and reads the next
//! line.
//!
//! - [`ShellError`] - anything that stops one command from running
//! - [`FileOperation`] - which filesystem call failed

use std::fmt;
use std::io;
use std::path::PathBuf;

use dirsh_core::{Arity, Command, DirectoryError, ParseError};
use thiserror::Error;

/// Filesystem calls the shell makes on behalf of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOperation {
    List,
    MakeDir,
    RemoveDir,
    Create,
    Delete,
    Open,
    Find,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "ls",
            Self::MakeDir => "mkdir",
            Self::RemoveDir => "rmdir",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Open => "open",
            Self::Find => "find",
        };
        f.write_str(name)
    }
}

/// Reasons a command line was not carried out.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The line itself could not be tokenized.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// First word is not a known command.
    #[error("invalid command: {0}. Type 'HELP' for available commands.")]
    InvalidCommand(String),

    /// Known command, unacceptable number of arguments.
    #[error("{command}: expected {expected}, got {found}")]
    WrongArgumentCount {
        command: Command,
        expected: Arity,
        found: usize,
    },

    /// The directory cursor refused to move.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The operating system call failed.
    #[error("{operation}: {}: {source}", .path.display())]
    FileOperationFailed {
        operation: FileOperation,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ShellError {
    /// Wrap an I/O error from `operation` on `path`.
    pub fn file_op(
        operation: FileOperation,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::FileOperationFailed {
            operation,
            path,
            source,
        }
    }
}
