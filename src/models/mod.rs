//! Data models for the shell.
//!
//! - [`OutputLine`], [`TextStyle`] - command output handed to the REPL

mod terminal;

pub use terminal::{OutputLine, TextStyle};
