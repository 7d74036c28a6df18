// LogReader - core/report.rs
//
// Pure report-building helpers: file name filtering, ordering, joining, and
// length capping. No I/O; the app layer feeds in listed names and read
// results.

use crate::core::model::{CombinedReport, LogEntry};
use crate::util::constants;

// =============================================================================
// Options
// =============================================================================

/// Knobs for building a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Hard cap on the report length in characters (not bytes).
    pub max_chars: usize,

    /// Append `TRUNCATION_MARKER` when the cap cuts the report short.
    /// The marker counts towards `max_chars`.
    pub mark_truncation: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_chars: constants::DEFAULT_MAX_REPORT_CHARS,
            mark_truncation: false,
        }
    }
}

// =============================================================================
// File selection
// =============================================================================

/// Returns true for names of the form `log_*.txt` (case-sensitive).
pub fn is_log_file_name(name: &str) -> bool {
    name.starts_with(constants::LOG_FILE_PREFIX) && name.ends_with(constants::LOG_FILE_SUFFIX)
}

/// Keep the log file names and order them newest-first.
///
/// "Newest" is descending lexicographic order of the name, which only
/// matches chronology for zero-padded, date-like names.
pub fn select_log_files<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut selected: Vec<String> = names
        .into_iter()
        .filter(|n| is_log_file_name(n))
        .collect();
    selected.sort_unstable_by(|a, b| b.cmp(a));
    selected
}

// =============================================================================
// Report assembly
// =============================================================================

/// Join rendered entries with a blank line between each and cap the length.
pub fn build_report(entries: &[LogEntry], options: &ReportOptions) -> CombinedReport {
    let combined = entries
        .iter()
        .map(LogEntry::render)
        .collect::<Vec<_>>()
        .join(constants::ENTRY_SEPARATOR);

    let original_chars = combined.chars().count();
    let truncated = original_chars > options.max_chars;

    let text = if !truncated {
        combined
    } else if options.mark_truncation {
        let marker_chars = constants::TRUNCATION_MARKER.chars().count();
        if options.max_chars >= marker_chars {
            let mut text =
                truncate_chars(&combined, options.max_chars - marker_chars).to_string();
            text.push_str(constants::TRUNCATION_MARKER);
            text
        } else {
            // No room for the marker: fall back to a plain cut.
            truncate_chars(&combined, options.max_chars).to_string()
        }
    } else {
        truncate_chars(&combined, options.max_chars).to_string()
    };

    if truncated {
        tracing::debug!(
            original_chars,
            max_chars = options.max_chars,
            "Report truncated"
        );
    }

    CombinedReport {
        text,
        entry_count: entries.len(),
        error_count: entries.iter().filter(|e| e.is_error()).count(),
        original_chars,
        truncated,
    }
}

/// Return the first `max_chars` characters of `text`.
///
/// Cuts on a char boundary so multi-byte characters are never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
