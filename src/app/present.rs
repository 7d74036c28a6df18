// LogReader - app/present.rs
//
// One full run: aggregate, then hand the result to the display collaborator.

use crate::app::aggregate;
use crate::core::model::DisplayResult;
use crate::core::report::ReportOptions;
use crate::platform::dialog::InfoDisplay;
use crate::util::error::DisplayError;
use std::path::Path;

/// Aggregate `dir` and show the outcome through `display` exactly once.
///
/// Returns the result that was shown. Only a failure of the display itself
/// is an error.
pub fn present(
    dir: &Path,
    options: &ReportOptions,
    display: &mut dyn InfoDisplay,
) -> Result<DisplayResult, DisplayError> {
    let result = aggregate::aggregate_with(dir, options);
    display.show_info(result.title(), &result.message())?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[derive(Default)]
    struct Recorder {
        shown: Vec<(String, String)>,
    }

    impl InfoDisplay for Recorder {
        fn show_info(&mut self, title: &str, message: &str) -> Result<(), DisplayError> {
            self.shown.push((title.to_string(), message.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_missing_dir_shows_info_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = Recorder::default();
        let result = present(
            &dir.path().join("logs"),
            &ReportOptions::default(),
            &mut recorder,
        )
        .unwrap();
        assert_eq!(result, DisplayResult::NoLogsFound);
        assert_eq!(
            recorder.shown,
            vec![("Log Reader".to_string(), "No logs found.".to_string())]
        );
    }

    #[test]
    fn test_report_shown_under_report_title() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("log_1.txt"), "started\n").unwrap();
        let mut recorder = Recorder::default();
        present(dir.path(), &ReportOptions::default(), &mut recorder).unwrap();
        assert_eq!(
            recorder.shown,
            vec![(
                "Game Logs".to_string(),
                "--- log_1.txt ---\nstarted".to_string()
            )]
        );
    }

    struct Failing;

    impl InfoDisplay for Failing {
        fn show_info(&mut self, title: &str, _message: &str) -> Result<(), DisplayError> {
            Err(DisplayError::Io {
                title: title.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "no display"),
            })
        }
    }

    #[test]
    fn test_display_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let err = present(dir.path(), &ReportOptions::default(), &mut Failing).unwrap_err();
        assert!(err.to_string().contains("Log Reader"));
    }
}
