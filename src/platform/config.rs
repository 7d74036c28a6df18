// LogReader - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::report::ReportOptions;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogReader configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logreader/ or %APPDATA%\LogReader\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[reader]` section.
    pub reader: ReaderSection,
    /// `[report]` section.
    pub report: ReportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[reader]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReaderSection {
    /// Directory holding the `log_*.txt` files.
    pub log_dir: Option<String>,
}

/// `[report]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Report length cap in characters.
    pub max_chars: Option<usize>,
    /// Append a marker when the report is cut short.
    pub mark_truncation: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory to scan.
    pub log_dir: PathBuf,
    /// Report building options.
    pub report: ReportOptions,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(constants::DEFAULT_LOG_DIR),
            report: ReportOptions::default(),
            log_level: None,
        }
    }
}

/// Read and parse `path`. `Ok(None)` when the file does not exist.
pub fn read_raw_config(path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::TomlParse {
            path: path.to_path_buf(),
            source,
        })
}

/// Load and validate config.toml at `path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings (first run). An unreadable
/// or unparseable file yields defaults plus one warning.
pub fn load_config(path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw = match read_raw_config(path) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
            return (AppConfig::default(), warnings);
        }
        Err(e) => {
            warnings.push(format!("{e}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- Reader: log_dir --
    if let Some(ref dir) = raw.reader.log_dir {
        if dir.trim().is_empty() {
            warnings.push(format!(
                "[reader] log_dir is empty. Using default ({}).",
                constants::DEFAULT_LOG_DIR
            ));
        } else {
            config.log_dir = PathBuf::from(dir);
        }
    }

    // -- Report: max_chars --
    if let Some(max) = raw.report.max_chars {
        if (constants::MIN_MAX_REPORT_CHARS..=constants::ABSOLUTE_MAX_REPORT_CHARS).contains(&max)
        {
            config.report.max_chars = max;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[report] max_chars".to_string(),
                value: max.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_MAX_REPORT_CHARS,
                    constants::ABSOLUTE_MAX_REPORT_CHARS
                ),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_MAX_REPORT_CHARS
            ));
        }
    }

    // -- Report: mark_truncation --
    if let Some(mark) = raw.report.mark_truncation {
        config.report.mark_truncation = mark;
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_values_applied() {
        let (_dir, path) = write_config(
            r#"
            [reader]
            log_dir = "game/logs"

            [report]
            max_chars = 2000
            mark_truncation = true

            [logging]
            level = "DEBUG"
            "#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_dir, PathBuf::from("game/logs"));
        assert_eq!(config.report.max_chars, 2000);
        assert!(config.report.mark_truncation);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let (_dir, path) = write_config(
            r#"
            [report]
            max_chars = 5

            [logging]
            level = "chatty"
            "#,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(config.report.max_chars, constants::DEFAULT_MAX_REPORT_CHARS);
        assert!(config.log_level.is_none());
        assert_eq!(warnings.len(), 2, "got: {warnings:?}");
        assert!(warnings[0].contains("max_chars"));
        assert!(warnings[1].contains("chatty"));
    }

    #[test]
    fn test_unparseable_file_warns_and_defaults() {
        let (_dir, path) = write_config("[report\nmax_chars = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Config parse error"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let (_dir, path) = write_config("[future]\nflag = true\n[report]\nmax_chars = 300\n");
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty());
        assert_eq!(config.report.max_chars, 300);
    }
}
