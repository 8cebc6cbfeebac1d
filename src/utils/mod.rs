//! Utility modules.
//!
//! Provides:
//! - [`render_line`] - Plain text rendering of output lines
//! - [`format_size`] - Human readable file sizes

mod format;

pub use format::{format_size, render_line};
