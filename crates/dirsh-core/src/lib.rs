//! Core of the `dirsh` file navigation shell.
//!
//! This crate provides:
//! - [`parse_input`] and [`Lexer`] for splitting an input line into a
//!   [`Command`] and its arguments
//! - [`PathResolver`], the directory cursor that resolves user paths
//! - [`PathSegments`], the shared path arithmetic behind the resolver
//!
//! Nothing here touches the filesystem except
//! [`PathResolver::change_directory`], which checks that its target is an
//! existing directory before moving the cursor.

mod command;
pub mod error;
pub mod parser;
pub mod path;
pub mod resolver;

pub use command::{Arity, Command};
pub use error::{DirectoryError, ParseError};
pub use parser::{Lexer, ParsedCommand, parse_input, tokenize};
pub use path::{Anchor, PathSegments, is_absolute, path_segments};
pub use resolver::{PathResolver, Resolved};
