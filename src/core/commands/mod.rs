//! Command execution.
//!
//! This module provides:
//! - `execute_line` to parse and run one input line
//! - `execute_command` to run an already parsed command
//! - `CommandResult` for command execution results
//!
//! # Architecture
//!
//! Lines are parsed by `dirsh_core::parse_input` into a `ParsedCommand`,
//! then executed via `execute_command`. Every failure is turned into an
//! error line here, so the REPL never stops because of one.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use dirsh_core::{PathResolver, parse_input};

use crate::core::error::ShellError;
use crate::core::filesystem::FileSystem;

/// Parse and run one input line, reporting failures as output.
pub fn execute_line<F: FileSystem + ?Sized>(
    line: &str,
    cwd: &mut PathResolver,
    fs: &F,
) -> CommandResult {
    match run_line(line, cwd, fs) {
        Ok(result) => result,
        Err(err) => {
            log::debug!("{:?} failed: {:?}", line, err);
            CommandResult::error(err.to_string())
        }
    }
}

/// Parse and run one input line.
///
/// A blank line is a no-op.
pub fn run_line<F: FileSystem + ?Sized>(
    line: &str,
    cwd: &mut PathResolver,
    fs: &F,
) -> Result<CommandResult, ShellError> {
    match parse_input(line)? {
        Some(parsed) => execute_command(&parsed, cwd, fs),
        None => Ok(CommandResult::empty()),
    }
}
