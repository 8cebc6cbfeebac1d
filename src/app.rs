//! Root application module.
//!
//! Contains the [`Session`] that owns the shell state and the line-by-line
//! REPL loop that drives it.

use std::io::{self, BufRead, Write};
use std::path::Path;

use dirsh_core::{DirectoryError, PathResolver};
use thiserror::Error;

use crate::config::{
    APP_NAME, APP_TAGLINE, APP_VERSION, ASCII_BANNER, CURRENT_DIR_LABEL, DIVIDER, PROMPT,
};
use crate::core::{CommandResult, FileSystem, execute_line};
use crate::utils::render_line;

/// Errors that end the program instead of a single command.
#[derive(Debug, Error)]
pub enum AppError {
    /// The starting directory was refused.
    #[error("cannot start in that directory: {0}")]
    StartDirectory(#[from] DirectoryError),
    /// Terminal input or output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

// ============================================================================
// Session
// ============================================================================

/// State of one shell session.
///
/// The directory cursor lives here and nowhere else; commands receive it by
/// `&mut` for the duration of one line.
pub struct Session<F: FileSystem> {
    cwd: PathResolver,
    fs: F,
}

impl<F: FileSystem> Session<F> {
    /// Create a session starting in `start`, which must be an existing
    /// directory.
    pub fn new(start: &Path, fs: F) -> Result<Self, AppError> {
        Ok(Self {
            cwd: PathResolver::from_path(start)?,
            fs,
        })
    }

    /// The directory cursor.
    pub fn cwd(&self) -> &PathResolver {
        &self.cwd
    }

    /// Run one input line.
    pub fn execute(&mut self, line: &str) -> CommandResult {
        execute_line(line, &mut self.cwd, &self.fs)
    }

    /// Read lines from `input` until `EXIT` or end of input, writing the
    /// screen to `out`.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<(), AppError> {
        draw_start_screen(out)?;

        let mut line = String::new();
        loop {
            self.draw_prompt(out)?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                log::debug!("end of input, leaving");
                writeln!(out)?;
                break;
            }

            let result = self.execute(line.trim_end_matches(['\n', '\r']));
            for output in &result.output {
                writeln!(out, "{}", render_line(output))?;
            }
            if result.exit {
                break;
            }
        }

        out.flush()?;
        Ok(())
    }

    fn draw_prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", DIVIDER)?;
        writeln!(out, "{}{}", CURRENT_DIR_LABEL, self.cwd.current().display())?;
        writeln!(out, "{}", DIVIDER)?;
        write!(out, "{}", PROMPT)?;
        out.flush()
    }
}

fn draw_start_screen<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", DIVIDER)?;
    write!(out, "{}", ASCII_BANNER)?;
    writeln!(out)?;
    writeln!(out, "\t{} v{}  {}", APP_NAME, APP_VERSION, APP_TAGLINE)?;
    writeln!(out, "\tType HELP for the list of commands.")
}
