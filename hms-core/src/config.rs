//! Configuration
//!
//! Values are layered: built-in defaults, then an optional YAML file named by
//! `HMS_CONFIG`, then individual `HMS_*` environment overrides.
//!
//! ```yaml
//! store:
//!   data_dir: /var/lib/hms
//! logging:
//!   directory: /var/log/hms
//!   level: debug
//!   json: true
//! console:
//!   clear_screen: false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming a YAML config file
pub const CONFIG_ENV: &str = "HMS_CONFIG";

/// Where record files live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding `patients.txt` and friends
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Directory for rotated log files
    pub directory: PathBuf,
    /// Prefix of each daily log file
    pub file_prefix: String,
    /// Default filter when `RUST_LOG` is unset (e.g. "info", "hms_core=debug")
    pub level: String,
    /// Write the file log as JSON lines
    pub json: bool,
    /// Also log warnings to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_prefix: "hms.log".to_string(),
            level: "info".to_string(),
            json: false,
            stderr: false,
        }
    }
}

/// Console presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Clear the terminal before drawing each menu
    pub clear_screen: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HmsConfig {
    /// Record store settings
    pub store: StoreConfig,
    /// Logging settings
    pub logging: LogConfig,
    /// Console settings
    pub console: ConsoleConfig,
}

impl HmsConfig {
    /// Parse a YAML document; absent keys keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| Error::config(format!("Invalid YAML: {}", e)))
    }

    /// Load a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {:?}: {}", path, e)))?;
        Self::from_yaml(&content)
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve environment variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("HMS_DATA_DIR") {
            self.store.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("HMS_LOG_DIR") {
            self.logging.directory = PathBuf::from(dir);
        }
        if let Some(level) = lookup("HMS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(value) = lookup("HMS_LOG_JSON") {
            self.logging.json = parse_flag("HMS_LOG_JSON", &value)?;
        }
        if let Some(value) = lookup("HMS_CLEAR_SCREEN") {
            self.console.clear_screen = parse_flag("HMS_CLEAR_SCREEN", &value)?;
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = HmsConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, HmsConfig::default());
        assert_eq!(config.store.data_dir, PathBuf::from("."));
        assert!(config.console.clear_screen);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = HmsConfig::from_yaml("logging:\n  level: debug\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file_prefix, "hms.log");
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hms.yaml");
        std::fs::write(&path, "store:\n  data_dir: /from/file\nconsole:\n  clear_screen: true\n")
            .unwrap();
        let path_str = path.to_string_lossy().to_string();

        let config = HmsConfig::from_lookup(lookup_from(&[
            (CONFIG_ENV, path_str.as_str()),
            ("HMS_DATA_DIR", "/from/env"),
            ("HMS_CLEAR_SCREEN", "off"),
        ]))
        .unwrap();

        assert_eq!(config.store.data_dir, PathBuf::from("/from/env"));
        assert!(!config.console.clear_screen);
    }

    #[test]
    fn test_bad_flag_is_config_error() {
        let err = HmsConfig::from_lookup(lookup_from(&[("HMS_LOG_JSON", "maybe")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let err = HmsConfig::from_lookup(lookup_from(&[(CONFIG_ENV, "/no/such/hms.yaml")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
