//! Configuration management for artgrid.
//!
//! Configuration is read-only: an optional TOML file, then the
//! `ARTGRID_BASE_URL` environment variable, then command-line flags.
//! Nothing is written back to disk.

mod settings;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use settings::{Settings, SourceSettings};

/// Environment variable overriding `source.base_url`.
pub const BASE_URL_ENV: &str = "ARTGRID_BASE_URL";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file could not be read.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Presentation settings.
    pub settings: Settings,
    /// Data source settings.
    pub source: SourceSettings,
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// location is tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)?
                } else {
                    debug!(path = %path.display(), "No config file, using defaults");
                    Self::default()
                }
            }
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.is_empty() {
                debug!(base_url = %base_url, "Base URL overridden from environment");
                config.source.base_url = base_url;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        info!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// The default config file path: `{config_dir}/artgrid/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("artgrid").join("config.toml"))
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.settings.validate()?;
        self.source.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::settings::DEFAULT_BASE_URL;
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_load_explicit_file() {
        std::env::remove_var(BASE_URL_ENV);
        let file = write_config(
            r#"
            [settings]
            theme = "light"
            tick_rate_ms = 50

            [source]
            base_url = "http://localhost:8080/api/v1"
            timeout_secs = 10
            "#,
        );

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.settings.theme, "light");
        assert_eq!(config.settings.tick_rate_ms, 50);
        assert_eq!(config.source.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.source.timeout_secs, 10);
    }

    #[test]
    #[serial]
    fn test_load_partial_file_uses_defaults() {
        std::env::remove_var(BASE_URL_ENV);
        let file = write_config("[source]\ntimeout_secs = 5\n");

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.source.timeout_secs, 5);
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    #[serial]
    fn test_invalid_toml_is_parse_error() {
        let file = write_config("[source\nbase_url = ");
        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    #[serial]
    fn test_invalid_value_is_validation_error() {
        std::env::remove_var(BASE_URL_ENV);
        let file = write_config("[source]\nbase_url = \"artic.edu\"\n");
        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    #[serial]
    fn test_env_overrides_base_url() {
        let file = write_config("[source]\nbase_url = \"https://api.artic.edu/api/v1\"\n");
        std::env::set_var(BASE_URL_ENV, "http://localhost:9000");

        let config = Config::load(Some(file.path()));
        std::env::remove_var(BASE_URL_ENV);

        assert_eq!(config.unwrap().source.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_default_path_structure() {
        let path = Config::default_path().unwrap();
        assert!(path.ends_with("artgrid/config.toml"));
    }
}
