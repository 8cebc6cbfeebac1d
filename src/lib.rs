//! `dirsh`: an interactive shell for navigating and managing files.
//!
//! The tokenizer and the directory cursor live in `dirsh-core`; this crate
//! adds command execution against the host filesystem and the REPL.

pub mod app;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
