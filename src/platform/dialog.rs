// LogReader - platform/dialog.rs
//
// Display collaborators. The app layer only sees the `InfoDisplay` trait, so
// aggregation runs the same with a native popup, a terminal, or a test
// recorder on the other end.

use crate::util::error::DisplayError;
use std::io::Write;

/// Something that can show a titled informational message to the user.
pub trait InfoDisplay {
    /// Show `message` under `title`. Blocks until the message has been shown
    /// (for a dialog: until the user dismisses it).
    fn show_info(&mut self, title: &str, message: &str) -> Result<(), DisplayError>;
}

// =============================================================================
// Native dialog
// =============================================================================

/// Modal information dialog via the platform's native message box.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogDisplay;

impl InfoDisplay for DialogDisplay {
    fn show_info(&mut self, title: &str, message: &str) -> Result<(), DisplayError> {
        tracing::debug!(title, chars = message.chars().count(), "Showing dialog");
        // Only one button, so the result carries no information.
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
        tracing::debug!(title, "Dialog dismissed");
        Ok(())
    }
}

// =============================================================================
// Console
// =============================================================================

/// Writes messages to a stream: stdout for headless use, a buffer in tests.
///
/// Output layout:
/// ```text
/// <title>
/// =======
/// <message>
/// ```
#[derive(Debug)]
pub struct ConsoleDisplay<W: Write> {
    out: W,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the display and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleDisplay<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> InfoDisplay for ConsoleDisplay<W> {
    fn show_info(&mut self, title: &str, message: &str) -> Result<(), DisplayError> {
        let rule = "=".repeat(title.chars().count());
        writeln!(self.out, "{title}\n{rule}\n{message}")
            .and_then(|()| self.out.flush())
            .map_err(|source| DisplayError::Io {
                title: title.to_string(),
                source,
            })
    }
}
