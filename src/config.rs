//! Application configuration.
//!
//! Compile-time defaults for the terminal front-end. Text assets are loaded
//! with `include_str!`; command-line flags in `main` override the rest.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner printed at startup unless `--quiet`.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Help text for the `help` builtin.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the prompt.
pub const APP_NAME: &str = "treesh";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tagline printed under the banner.
pub const APP_TAGLINE: &str = "in-memory namespace shell";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of result lines kept in the scrollback.
pub const MAX_TERMINAL_HISTORY: u32 = 1000;

/// Separator between the echoed input and its result.
pub const RESULT_SEPARATOR: &str = " : ";

/// Front-end builtins, handled before the command dispatcher sees a line.
pub mod builtins {
    pub const EXIT: &str = "exit";
    pub const HELP: &str = "help";
    pub const CLEAR: &str = "clear";
    pub const HISTORY: &str = "history";
}

// =============================================================================
// Logging
// =============================================================================

/// Filter used when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
