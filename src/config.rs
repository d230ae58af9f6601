//! Run configuration.
//!
//! Settings resolve in precedence order: command-line flags override
//! values from an optional TOML file, which override built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entropy::SourceKind;

/// Default number of Diceware numbers per run.
pub const DEFAULT_ROLLS: u64 = 10;

/// Default separator between passphrase words.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Configuration errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("number of rolls must be at least 1 (got {0})")]
    InvalidRolls(i64),
    #[error("failed to read config file: {0}")]
    FileRead(String),
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// How many Diceware numbers to generate.
    pub rolls: u64,
    /// Word file for number-to-word lookup, if any.
    pub dictionary: Option<PathBuf>,
    /// Print the assembled passphrase after the numbers.
    pub passphrase: bool,
    /// Separator between passphrase words.
    pub separator: String,
    /// Entropy backend to draw random bytes from.
    pub source: SourceKind,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rolls: DEFAULT_ROLLS,
            dictionary: None,
            passphrase: false,
            separator: DEFAULT_SEPARATOR.to_string(),
            source: SourceKind::default(),
        }
    }
}

/// Configuration file format.
///
/// Every key is optional; a missing key falls through to the
/// command-line flag or the built-in default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub rolls: Option<i64>,
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
    #[serde(default)]
    pub passphrase: Option<bool>,
    #[serde(default)]
    pub separator: Option<String>,
    #[serde(default)]
    pub source: Option<SourceKind>,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_config() {
        let config = RunConfig::default();
        assert_eq!(config.rolls, 10);
        assert_eq!(config.separator, " ");
        assert_eq!(config.source, SourceKind::Os);
        assert!(config.dictionary.is_none());
        assert!(!config.passphrase);
    }

    #[test]
    fn test_file_config_parses_partial_keys() {
        let config: FileConfig = toml::from_str("rolls = 6\nsource = \"tpm\"\n").unwrap();
        assert_eq!(config.rolls, Some(6));
        assert_eq!(config.source, Some(SourceKind::Tpm));
        assert!(config.separator.is_none());
    }

    #[test]
    fn test_file_config_empty_file() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.rolls.is_none());
        assert!(config.dictionary.is_none());
    }

    #[test]
    fn test_from_file_missing() {
        let result = FileConfig::from_file("/nonexistent/dicepass.toml");
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let path =
            std::env::temp_dir().join(format!("dicepass-config-{}.toml", std::process::id()));
        std::fs::write(&path, "rolls = = 3").unwrap();

        let result = FileConfig::from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
