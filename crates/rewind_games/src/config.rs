//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front-end, read from a TOML file.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Title shown above the board.
    #[serde(default = "default_title")]
    title: String,

    /// File the TUI writes logs to (stdout belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show 1-9 hints in empty cells.
    #[serde(default = "default_show_move_numbers")]
    #[getter(skip)]
    show_move_numbers: bool,
}

fn default_title() -> String {
    "Rewind - Tic Tac Toe".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind_tui.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_move_numbers() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_move_numbers: default_show_move_numbers(),
        }
    }
}

impl GameConfig {
    /// Whether empty cells show their 1-9 key hint.
    pub fn show_move_numbers(&self) -> bool {
        self.show_move_numbers
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config = Self::from_file(path)?;
            info!("Config loaded");
            Ok(config)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides_fields() {
        let config = GameConfig::from_toml(
            r#"
            title = "Office league"
            show_move_numbers = false
            "#,
        )
        .expect("valid config");

        assert_eq!(config.title(), "Office league");
        assert!(!config.show_move_numbers());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_load_reads_existing_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "log_filter = \"debug\"").expect("write config");

        let config = GameConfig::load(file.path()).expect("valid config");
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = GameConfig::load(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_bad_toml_reports_location() {
        let err = GameConfig::from_toml("show_move_numbers = \"yes\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
