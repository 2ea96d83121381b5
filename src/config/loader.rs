use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/checkall/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("checkall").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// The screen needs at least one item: an empty list has no meaningful
    /// aggregate. Label content itself is not inspected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one item must be configured".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/checkall.toml"))
            .expect("defaults for missing file");
        let labels: Vec<&str> = config.items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3"]);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn items_load_in_declared_order() {
        let file = write_config(
            r#"
            tick_rate_ms = 100

            [[items]]
            label = "alpha"

            [[items]]
            label = "beta"
            "#,
        );
        let config = Config::load_from(file.path()).expect("valid config");
        let labels: Vec<&str> = config.items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["alpha", "beta"]);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn labels_are_not_validated() {
        let file = write_config(
            r#"
            [[items]]
            label = ""
            "#,
        );
        let config = Config::load_from(file.path()).expect("empty label is allowed");
        assert_eq!(config.items[0].label, "");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let file = write_config("items = not-toml");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn zero_items_fail_validation() {
        let file = write_config("items = []");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
