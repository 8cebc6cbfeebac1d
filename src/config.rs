//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`. Runtime
//! settings come from command line flags (see `main.rs`); nothing is read
//! from or written to disk.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner displayed on the start screen.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed on the start screen.
pub const APP_NAME: &str = "dirsh";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tagline displayed under the banner.
pub const APP_TAGLINE: &str = "A small shell for walking around your filesystem";

// =============================================================================
// Screen Layout
// =============================================================================

/// Horizontal rule between screen sections.
pub const DIVIDER: &str = "---------------------------------------------------------------";

/// Label in front of the current directory.
pub const CURRENT_DIR_LABEL: &str = "Current Directory: ";

/// Input prompt.
pub const PROMPT: &str = ":";

/// First line of the `HELP` listing.
pub const HELP_HEADER: &str = "-- Available Commands --";

/// Last line of the `HELP` listing.
pub const HELP_FOOTER: &str = "Type \"HELP COMMAND\" for usage information.";

// =============================================================================
// Logging
// =============================================================================

/// Log filter used when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
