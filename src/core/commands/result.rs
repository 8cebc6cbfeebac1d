//! Command execution result type.

use crate::models::OutputLine;

/// Result of executing a command.
///
/// Commands produce output and may ask the REPL to stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Set only by `EXIT`
    pub exit: bool,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            exit: false,
        }
    }

    /// Create a result with a single error line.
    pub fn error(message: impl Into<String>) -> Self {
        Self::output(vec![OutputLine::error(message)])
    }

    /// Create a result that ends the session.
    pub fn exit() -> Self {
        Self {
            output: vec![],
            exit: true,
        }
    }

    /// Create an empty result (no output, keep going).
    pub fn empty() -> Self {
        Self::output(vec![])
    }

    pub fn has_error(&self) -> bool {
        self.output.iter().any(OutputLine::is_error)
    }
}
