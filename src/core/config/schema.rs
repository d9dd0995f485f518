//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., the log level must be a
//! known level and the output format one of the supported formats).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// data_dir = "/var/lib/subway"
/// log_level = "info"
///
/// [output]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Where line documents and locks are stored
    pub data_dir: Option<PathBuf>,

    /// Default log level ("error", "warn", "info", "debug", "trace")
    pub log_level: Option<String>,

    /// Output defaults
    pub output: Option<OutputConfig>,
}

impl GlobalConfig {
    /// Valid log levels.
    pub const LOG_LEVELS: &'static [&'static str] = &["error", "warn", "info", "debug", "trace"];

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.log_level {
            if !Self::LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid log level '{}', must be one of: {}",
                    level,
                    Self::LOG_LEVELS.join(", ")
                )));
            }
        }

        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "data_dir cannot be empty".to_string(),
                ));
            }
        }

        if let Some(output) = &self.output {
            output.validate()?;
        }

        Ok(())
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// "text" or "json"
    pub format: Option<String>,
}

impl OutputConfig {
    /// Valid output formats.
    pub const VALID_FORMATS: &'static [&'static str] = &["text", "json"];

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.format {
            if !Self::VALID_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid output format '{}', must be one of: {}",
                    format,
                    Self::VALID_FORMATS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_valid() {
        assert!(GlobalConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_full_config() {
        let config: GlobalConfig = toml::from_str(
            r#"
            data_dir = "/tmp/subway"
            log_level = "debug"

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/subway")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bad_log_level_rejected() {
        let config = GlobalConfig {
            log_level: Some("loud".into()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(msg)) if msg.contains("loud")
        ));
    }

    #[test]
    fn bad_output_format_rejected() {
        let config = GlobalConfig {
            output: Some(OutputConfig {
                format: Some("yaml".into()),
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<GlobalConfig, _> = toml::from_str("colour = true");
        assert!(result.is_err());
    }
}
