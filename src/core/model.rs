// LogReader - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no platform
// dependencies. These are the shared vocabulary across all layers.

use crate::util::constants;
use crate::util::error::ReadError;
use std::borrow::Cow;
use std::path::PathBuf;

// =============================================================================
// Log entry
// =============================================================================

/// What a single log file contributed to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBody {
    /// Trimmed, non-empty file content.
    Content(String),

    /// The file was read but held only whitespace.
    Empty,

    /// The file could not be read. Holds the full inline error line.
    ReadFailed(String),
}

/// One file's section of the report. Exists only while a report is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// File name as listed in the log directory.
    pub file_name: String,
    pub body: EntryBody,
}

impl LogEntry {
    /// Build an entry from the outcome of reading `file_name`.
    ///
    /// Content is trimmed; whitespace-only content becomes `EntryBody::Empty`.
    pub fn from_read(file_name: impl Into<String>, read: Result<String, ReadError>) -> Self {
        let body = match read {
            Ok(text) => {
                let trimmed = text.trim_matches(is_strippable);
                if trimmed.is_empty() {
                    EntryBody::Empty
                } else {
                    EntryBody::Content(trimmed.to_string())
                }
            }
            Err(e) => EntryBody::ReadFailed(e.to_string()),
        };
        Self {
            file_name: file_name.into(),
            body,
        }
    }

    /// Render the entry as it appears in the report.
    ///
    /// Read failures are a single line with no `--- name ---` header.
    pub fn render(&self) -> String {
        match &self.body {
            EntryBody::Content(text) => format!("--- {} ---\n{text}", self.file_name),
            EntryBody::Empty => format!(
                "--- {} ---\n{}",
                self.file_name,
                constants::EMPTY_LOG_PLACEHOLDER
            ),
            EntryBody::ReadFailed(line) => line.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, EntryBody::ReadFailed(_))
    }
}

/// Whitespace as far as trimming file content goes: Unicode whitespace plus
/// the ASCII file/group/record/unit separators (`\x1c`..=`\x1f`).
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

// =============================================================================
// Combined report
// =============================================================================

/// The joined, length-capped text of every entry from one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedReport {
    /// Report text, already truncated.
    pub text: String,

    /// Number of entries that went into the report.
    pub entry_count: usize,

    /// Number of entries that were read failures.
    pub error_count: usize,

    /// Character count before truncation.
    pub original_chars: usize,

    /// True when `text` is shorter than the untruncated report.
    pub truncated: bool,
}

// =============================================================================
// Display result
// =============================================================================

/// Outcome of one aggregation, ready to hand to the display collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayResult {
    /// The log directory does not exist.
    NoLogsFound,

    /// The directory exists but holds no `log_*.txt` files.
    NoLogFiles,

    /// The path exists but could not be listed (not a directory, no access).
    DirectoryUnreadable { path: PathBuf, reason: String },

    /// At least one log file was found.
    Report(CombinedReport),
}

impl DisplayResult {
    /// Dialog title for this outcome.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Report(_) => constants::REPORT_TITLE,
            _ => constants::INFO_TITLE,
        }
    }

    /// Dialog body for this outcome.
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::NoLogsFound => Cow::Borrowed(constants::MSG_NO_LOGS_FOUND),
            Self::NoLogFiles => Cow::Borrowed(constants::MSG_NO_LOG_FILES),
            Self::DirectoryUnreadable { path, reason } => Cow::Owned(format!(
                "Could not read log directory '{}': {reason}",
                path.display()
            )),
            Self::Report(report) => Cow::Borrowed(report.text.as_str()),
        }
    }

    /// The report, if this outcome produced one.
    pub fn report(&self) -> Option<&CombinedReport> {
        match self {
            Self::Report(report) => Some(report),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_content_is_trimmed() {
        let entry = LogEntry::from_read("log_a.txt", Ok("\n  boot ok \r\n".to_string()));
        assert_eq!(entry.body, EntryBody::Content("boot ok".to_string()));
        assert_eq!(entry.render(), "--- log_a.txt ---\nboot ok");
    }

    #[test]
    fn test_whitespace_only_is_placeholder() {
        let entry = LogEntry::from_read("log_a.txt", Ok(" \t\n\n".to_string()));
        assert_eq!(entry.body, EntryBody::Empty);
        assert_eq!(entry.render(), "--- log_a.txt ---\n(Log file is empty.)");
    }

    #[test]
    fn test_separator_controls_are_trimmed() {
        let only_controls = LogEntry::from_read("log_a.txt", Ok("\x1c\x1f".to_string()));
        assert_eq!(only_controls.body, EntryBody::Empty);

        let wrapped = LogEntry::from_read("log_b.txt", Ok("\x1d\n ok \x1e".to_string()));
        assert_eq!(wrapped.body, EntryBody::Content("ok".to_string()));
    }

    #[test]
    fn test_read_failure_has_no_header() {
        let err = ReadError {
            file: "log_a.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let entry = LogEntry::from_read("log_a.txt", Err(err));
        assert!(entry.is_error());
        assert_eq!(entry.render(), "Error reading log_a.txt: gone");
    }

    #[test]
    fn test_titles_and_messages() {
        assert_eq!(DisplayResult::NoLogsFound.title(), "Log Reader");
        assert_eq!(DisplayResult::NoLogsFound.message(), "No logs found.");
        assert_eq!(DisplayResult::NoLogFiles.message(), "No log files to read.");

        let report = DisplayResult::Report(CombinedReport {
            text: "--- log_a.txt ---\nx".to_string(),
            entry_count: 1,
            error_count: 0,
            original_chars: 19,
            truncated: false,
        });
        assert_eq!(report.title(), "Game Logs");
        assert_eq!(report.message(), "--- log_a.txt ---\nx");
        assert!(report.report().is_some());
        assert!(DisplayResult::NoLogFiles.report().is_none());
    }

    #[test]
    fn test_unreadable_message_names_path() {
        let result = DisplayResult::DirectoryUnreadable {
            path: PathBuf::from("logs"),
            reason: "'logs' is not a directory".to_string(),
        };
        assert_eq!(result.title(), "Log Reader");
        assert_eq!(
            result.message(),
            "Could not read log directory 'logs': 'logs' is not a directory"
        );
    }
}
