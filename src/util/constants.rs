// LogReader - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogReader";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogReader";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log file naming
// =============================================================================

/// Directory scanned when neither the CLI nor config.toml names one.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Literal prefix a file name must start with to be read.
pub const LOG_FILE_PREFIX: &str = "log_";

/// Literal suffix a file name must end with to be read.
pub const LOG_FILE_SUFFIX: &str = ".txt";

// =============================================================================
// Report formatting
// =============================================================================

/// Body used for a log file whose content is empty after trimming.
pub const EMPTY_LOG_PLACEHOLDER: &str = "(Log file is empty.)";

/// Separator placed between consecutive entries (one blank line).
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// Default cap on the report length, in characters.
///
/// Keeps the popup dialog at a size every platform's native message box can
/// still render.
pub const DEFAULT_MAX_REPORT_CHARS: usize = 5_000;

/// Minimum user-configurable report cap.
pub const MIN_MAX_REPORT_CHARS: usize = 100;

/// Maximum user-configurable report cap.
pub const ABSOLUTE_MAX_REPORT_CHARS: usize = 1_000_000;

/// Appended to a truncated report when `mark_truncation` is enabled.
pub const TRUNCATION_MARKER: &str = "\n\n... (truncated)";

// =============================================================================
// Display
// =============================================================================

/// Dialog title for the short informational messages.
pub const INFO_TITLE: &str = "Log Reader";

/// Dialog title for the combined report.
pub const REPORT_TITLE: &str = "Game Logs";

/// Message shown when the log directory does not exist.
pub const MSG_NO_LOGS_FOUND: &str = "No logs found.";

/// Message shown when the directory holds no matching files.
pub const MSG_NO_LOG_FILES: &str = "No log files to read.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Level names accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
