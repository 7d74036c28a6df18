// LogReader - platform/fs.rs
//
// Filesystem access for the log directory: a flat listing of entry names and
// whole-file UTF-8 reads. Nothing here writes, creates, or deletes.

use crate::util::error::{DirectoryError, ReadError};
use std::path::Path;

/// List the names of every entry directly inside `dir`.
///
/// Returns `Ok(None)` when `dir` does not exist or cannot be stat'ed. Entries of every file type
/// are returned; callers decide what to keep. Names that are not valid UTF-8
/// and entries that vanish mid-listing are skipped with a debug log line.
pub fn list_entry_names(dir: &Path) -> Result<Option<Vec<String>>, DirectoryError> {
    // Any stat failure (missing, access denied on a parent, a file used as a
    // path component) counts as "does not exist".
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(DirectoryError::NotADirectory {
                path: dir.to_path_buf(),
            })
        }
        Err(e) => {
            tracing::debug!(
                dir = %dir.display(),
                error = %e,
                "Log directory does not exist or cannot be inspected"
            );
            return Ok(None);
        }
    }

    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    let mut names = Vec::new();
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            // Depth 0 is the directory itself: nothing can be listed.
            Err(source) if source.depth() == 0 => {
                return Err(DirectoryError::Unreadable {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => {
                tracing::debug!(
                    path = %entry.path().display(),
                    "Skipping entry with non-UTF-8 name"
                );
            }
        }
    }

    tracing::debug!(dir = %dir.display(), entries = names.len(), "Directory listed");
    Ok(Some(names))
}

/// Read `dir/file_name` in full as UTF-8 text.
///
/// Line endings are normalised: `\r\n` and a lone `\r` both become `\n`.
/// The file handle is closed before this returns, on success and failure.
pub fn read_log_text(dir: &Path, file_name: &str) -> Result<String, ReadError> {
    std::fs::read_to_string(dir.join(file_name))
        .map(|text| normalize_newlines(&text))
        .map_err(|source| ReadError {
            file: file_name.to_string(),
            source,
        })
}

/// Convert Windows (`\r\n`) and classic Mac (`\r`) line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
