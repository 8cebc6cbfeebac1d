//! Formatting of output lines for a plain text terminal.

use crate::models::{OutputLine, TextStyle};

/// Format file size for display (e.g., "1.2K", "3.4M").
///
/// Right-aligned to five columns so listings line up.
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "    -".to_string(),
        Some(bytes) if bytes >= 1_000_000_000 => {
            format!("{:4.1}G", bytes as f64 / 1_000_000_000.0)
        }
        Some(bytes) if bytes >= 1_000_000 => format!("{:4.1}M", bytes as f64 / 1_000_000.0),
        Some(bytes) if bytes >= 1_000 => format!("{:4.1}K", bytes as f64 / 1_000.0),
        Some(bytes) => format!("{:4}B", bytes),
    }
}

/// Render one output line as terminal text.
pub fn render_line(line: &OutputLine) -> String {
    match line {
        OutputLine::Text(text) => text.clone(),
        OutputLine::Error(text) => format!("error: {}", text),
        OutputLine::Info(text) => format!("note: {}", text),
        OutputLine::ListEntry { name, style, size } => match style {
            TextStyle::Directory => format!("{}  {}/", format_size(None), name),
            TextStyle::File | TextStyle::Hidden => format!("{}  {}", format_size(*size), name),
        },
    }
}
