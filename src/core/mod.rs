//! Command execution for the shell.
//!
//! This module provides:
//! - [`execute_line`] and [`execute_command`] for running parsed commands
//! - [`FileSystem`] and [`HostFs`] for the filesystem operations they use
//! - [`ShellError`] for everything that can go wrong on one line

mod commands;
pub mod error;
mod filesystem;

pub use commands::{CommandResult, execute_command, execute_line, run_line};
pub use error::{FileOperation, ShellError};
pub use filesystem::{DirEntry, FileSystem, HostFs, MakeDirOutcome, sort_entries};
