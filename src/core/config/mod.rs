//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$SUBWAY_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/subway/config.toml`
//! 3. `~/.subway/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use subwayline::core::config::Config;
//!
//! let result = Config::load().unwrap();
//! let config = result.config;
//!
//! println!("Log level: {}", config.log_level());
//! println!("Output: {}", config.output_format());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, OutputConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::paths::StorePaths;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SUBWAY_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. Missing config files are not an error.
    pub fn load() -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::load_from(&path).map(|config| ConfigLoadResult { config, warnings });
            }
            warnings.push(ConfigWarning {
                message: format!("${CONFIG_ENV} points to a missing file, ignoring"),
                path,
            });
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("subway/config.toml");
            if path.exists() {
                return Self::load_from(&path).map(|config| ConfigLoadResult { config, warnings });
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".subway/config.toml");
            if path.exists() {
                return Self::load_from(&path).map(|config| ConfigLoadResult { config, warnings });
            }
        }

        Ok(ConfigLoadResult {
            config: Config::default(),
            warnings,
        })
    }

    /// Load and validate one config file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Config {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the data directory.
    ///
    /// Defaults to `~/.subway`; `None` only if no home directory exists.
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.global
            .data_dir
            .clone()
            .or_else(StorePaths::default_data_dir)
    }

    /// Get the log level.
    ///
    /// Defaults to "warn" if not configured.
    pub fn log_level(&self) -> &str {
        self.global.log_level.as_deref().unwrap_or("warn")
    }

    /// Get the output format.
    ///
    /// Defaults to "text" if not configured.
    pub fn output_format(&self) -> &str {
        self.global
            .output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("text")
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.log_level(), "warn");
        assert_eq!(config.output_format(), "text");
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            data_dir = "/srv/subway"
            log_level = "info"

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.data_dir(), Some(PathBuf::from("/srv/subway")));
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.output_format(), "json");
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn invalid_value_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "log_level = \"chatty\"").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn malformed_toml_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "log_level = ").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            Config::load_from(&temp.path().join("absent.toml")),
            Err(ConfigError::ReadError { .. })
        ));
    }
}
