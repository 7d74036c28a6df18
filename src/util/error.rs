// LogReader - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors keep their causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for a LogReader run.
///
/// Aggregation itself never fails and config problems degrade to warnings,
/// so only the display collaborator can end a run with an error.
#[derive(Debug)]
pub enum LogReaderError {
    /// The display collaborator could not show a message.
    Display(DisplayError),
}

impl fmt::Display for LogReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display(e) => write!(f, "Display error: {e}"),
        }
    }
}

impl std::error::Error for LogReaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Display(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Directory errors
// ---------------------------------------------------------------------------

/// Errors raised while listing the log directory.
///
/// A path that does not exist (or cannot be stat'ed) is not an error: it maps
/// to the "No logs found." outcome before any of these can occur.
#[derive(Debug)]
pub enum DirectoryError {
    /// The path exists but is not a directory.
    NotADirectory { path: PathBuf },

    /// The directory itself could not be opened for listing.
    Unreadable {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADirectory { path } => {
                write!(f, "'{}' is not a directory", path.display())
            }
            Self::Unreadable { path, source } => {
                write!(f, "Cannot list '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::NotADirectory { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-file read errors
// ---------------------------------------------------------------------------

/// A single log file could not be read.
///
/// Never fatal: the `Display` output is placed inline in the report in place
/// of the file's entry, and aggregation moves on to the next file.
#[derive(Debug)]
pub struct ReadError {
    /// File name as listed (not the full path).
    pub file: String,
    pub source: io::Error,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error reading {}: {}", self.file, self.source)
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Display errors
// ---------------------------------------------------------------------------

/// Errors raised by an `InfoDisplay` implementation.
#[derive(Debug)]
pub enum DisplayError {
    /// Writing the message to the output stream failed.
    Io { title: String, source: io::Error },
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { title, source } => {
                write!(f, "Failed to show '{title}': {source}")
            }
        }
    }
}

impl std::error::Error for DisplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<DisplayError> for LogReaderError {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

/// Convenience type alias for LogReader results.
pub type Result<T> = std::result::Result<T, LogReaderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_read_error_display_is_report_line() {
        let err = ReadError {
            file: "log_1.txt".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Error reading log_1.txt: denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_top_level_preserves_chain() {
        let inner = DisplayError::Io {
            title: "Game Logs".to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        let err: LogReaderError = inner.into();
        assert!(err.to_string().starts_with("Display error: Failed to show 'Game Logs'"));
        let display = err.source().expect("display source");
        assert!(display.source().is_some(), "io cause must be kept");
    }

    #[test]
    fn test_not_a_directory_has_no_source() {
        let err = DirectoryError::NotADirectory {
            path: PathBuf::from("logs"),
        };
        assert_eq!(err.to_string(), "'logs' is not a directory");
        assert!(err.source().is_none());
    }
}
