//! Configuration structures for dirwatch.
//!
//! This module provides configuration types for the watch engine:
//!
//! - [`WatchConfig`] - Watch loop settings (poll interval, shutdown bound)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] with values suited to a
//! single-operator workflow (a one-second poll cycle).

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the directory watch loop.
///
/// Controls how often pending filesystem notifications are drained and how
/// long a controller waits for the loop to exit when stopping it.
///
/// # Examples
///
/// ```
/// use dw_core::WatchConfig;
///
/// let config = WatchConfig::default();
/// assert_eq!(config.poll_interval_ms, 1000);
/// assert_eq!(config.stop_timeout_ms, 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Sleep interval between drain cycles, in milliseconds.
    ///
    /// Every pending notification is processed at the start of a cycle, so
    /// this bounds both event latency and worst-case stop latency.
    pub poll_interval_ms: u64,

    /// Upper bound on how long a controller waits for the loop to exit, in
    /// milliseconds.
    ///
    /// Stop requests are cooperative; the loop notices them at the next
    /// cycle boundary. This should therefore be at least one poll interval.
    pub stop_timeout_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            stop_timeout_ms: 2000,
        }
    }
}

impl WatchConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if the poll interval is zero
    /// (the loop would spin) or the stop timeout is shorter than one poll
    /// interval (a graceful stop could never be observed in time).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::invalid_option(
                "poll_interval_ms",
                "must be greater than zero",
            ));
        }
        if self.stop_timeout_ms < self.poll_interval_ms {
            return Err(ConfigError::invalid_option(
                "stop_timeout_ms",
                "must be at least one poll interval",
            ));
        }
        Ok(())
    }
}

/// Root configuration for dirwatch.
///
/// Combines all component configurations into a single structure that can be
/// loaded from a JSON configuration file or constructed programmatically.
///
/// # Examples
///
/// ```
/// use dw_core::Config;
///
/// let config = Config::default();
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// assert!(json.contains("poll_interval_ms"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Watch loop configuration.
    pub watch: WatchConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so a partial file is
    /// valid. The loaded configuration is validated before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Parse`] if it is not valid JSON, or
    /// [`ConfigError::InvalidOption`] if a value fails validation.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_std_path())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all component configurations.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.watch.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_watch_config_defaults() {
        let config = WatchConfig::default();
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.stop_timeout_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_watch_config_rejects_zero_interval() {
        let config = WatchConfig {
            poll_interval_ms: 0,
            stop_timeout_ms: 2000,
        };
        let error = config.validate().expect_err("zero interval must fail");
        assert!(error.to_string().contains("poll_interval_ms"));
    }

    #[test]
    fn test_watch_config_rejects_short_stop_timeout() {
        let config = WatchConfig {
            poll_interval_ms: 1000,
            stop_timeout_ms: 500,
        };
        let error = config.validate().expect_err("short timeout must fail");
        assert!(error.to_string().contains("stop_timeout_ms"));
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"watch": {"poll_interval_ms": 250}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.watch.poll_interval_ms, 250);
        // Other fields should have defaults
        assert_eq!(config.watch.stop_timeout_ms, 2000);
    }

    #[test]
    fn test_config_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"watch": {{"poll_interval_ms": 100}}}}"#).unwrap();

        let path = camino::Utf8Path::from_path(file.path()).unwrap();
        let config = Config::from_json_file(path).unwrap();
        assert_eq!(config.watch.poll_interval_ms, 100);
    }

    #[test]
    fn test_config_from_json_file_missing() {
        let result = Config::from_json_file(camino::Utf8Path::new("/nonexistent/dirwatch.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_config_from_json_file_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"watch": {{"poll_interval_ms": 0}}}}"#).unwrap();

        let path = camino::Utf8Path::from_path(file.path()).unwrap();
        let result = Config::from_json_file(path);
        assert!(matches!(result, Err(ConfigError::InvalidOption { .. })));
    }
}
