// LogReader - app/aggregate.rs
//
// Log aggregation: list the directory, pick the log files, read each one,
// and fold the results into a single report.
//
//   - A missing directory and an empty selection short-circuit with an
//     informational result before any file is opened.
//   - Per-file read errors are non-fatal; they become an inline line in the
//     report and the next file is read.
//   - Files are read one at a time; nothing is written.

use crate::core::model::{DisplayResult, LogEntry};
use crate::core::report::{self, ReportOptions};
use crate::platform::fs;
use std::path::Path;

/// Aggregate the log files in `dir` with the default options.
pub fn aggregate(dir: &Path) -> DisplayResult {
    aggregate_with(dir, &ReportOptions::default())
}

/// Aggregate the log files in `dir`.
///
/// Never fails: every problem is expressed in the returned `DisplayResult`.
pub fn aggregate_with(dir: &Path, options: &ReportOptions) -> DisplayResult {
    let names = match fs::list_entry_names(dir) {
        Ok(Some(names)) => names,
        Ok(None) => {
            tracing::info!(dir = %dir.display(), "Log directory not found");
            return DisplayResult::NoLogsFound;
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "Log directory unreadable");
            return DisplayResult::DirectoryUnreadable {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            };
        }
    };

    let log_files = report::select_log_files(names);
    if log_files.is_empty() {
        tracing::info!(dir = %dir.display(), "No log files matched");
        return DisplayResult::NoLogFiles;
    }

    tracing::debug!(dir = %dir.display(), files = log_files.len(), "Reading log files");

    let entries: Vec<LogEntry> = log_files
        .into_iter()
        .map(|name| {
            let read = fs::read_log_text(dir, &name);
            if let Err(ref e) = read {
                tracing::warn!(file = %name, error = %e.source, "Failed to read log file");
            }
            LogEntry::from_read(name, read)
        })
        .collect();

    let combined = report::build_report(&entries, options);

    tracing::info!(
        entries = combined.entry_count,
        errors = combined.error_count,
        chars = combined.text.chars().count(),
        truncated = combined.truncated,
        "Report built"
    );

    DisplayResult::Report(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = aggregate(&dir.path().join("logs"));
        assert_eq!(result, DisplayResult::NoLogsFound);
    }

    #[test]
    fn test_no_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join("readme.txt"), "x").unwrap();
        stdfs::write(dir.path().join("log_1.log"), "x").unwrap();
        assert_eq!(aggregate(dir.path()), DisplayResult::NoLogFiles);
    }

    #[test]
    fn test_path_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("logs");
        stdfs::write(&file, "x").unwrap();
        match aggregate(&file) {
            DisplayResult::DirectoryUnreadable { path, reason } => {
                assert_eq!(path, file);
                assert!(reason.contains("not a directory"), "reason: {reason}");
            }
            other => panic!("expected DirectoryUnreadable, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_named_like_log_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::create_dir(dir.path().join("log_dir.txt")).unwrap();
        stdfs::write(dir.path().join("log_a.txt"), "fine").unwrap();

        let result = aggregate(dir.path());
        let report = result.report().expect("report");
        assert_eq!(report.entry_count, 2);
        assert_eq!(report.error_count, 1);
        assert!(report.text.starts_with("Error reading log_dir.txt: "));
        assert!(report.text.ends_with("\n\n--- log_a.txt ---\nfine"));
    }

    #[test]
    fn test_options_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        stdfs::write(dir.path().join("log_a.txt"), "z".repeat(500)).unwrap();
        let options = ReportOptions {
            max_chars: 100,
            mark_truncation: false,
        };
        let result = aggregate_with(dir.path(), &options);
        let report = result.report().expect("report");
        assert_eq!(report.text.chars().count(), 100);
        assert!(report.truncated);
    }
}
