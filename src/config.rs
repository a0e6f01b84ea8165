//! Configuration management for waitlist
//!
//! This module handles loading, validating, and saving the JSON
//! configuration: where the database lives, which list commands operate on
//! when none is named, and the default table output.

use crate::database::DEFAULT_DB_FILE;
use crate::error::{Error, Result};
use crate::table::TableType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".waitlist.json";

/// List used when a command does not name one
pub const DEFAULT_LIST_NAME: &str = "wait_entries";

/// Main configuration structure for waitlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the SQLite database
    pub database_path: PathBuf,

    /// List name used when a command omits one
    pub default_list: String,

    /// Table style used when `--table-type` is not given
    pub table_type: TableType,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Configuration for logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            default_list: DEFAULT_LIST_NAME.to_string(),
            table_type: TableType::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Database location under the platform data directory
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("waitlist")
        .join(DEFAULT_DB_FILE)
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    ///
    /// A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
        Ok(home.join(DEFAULT_CONFIG_FILE))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_list.trim().is_empty() {
            return Err(Error::config_validation(
                "default_list",
                "must not be empty",
            ));
        }

        if self.database_path.as_os_str().is_empty() {
            return Err(Error::config_validation(
                "database_path",
                "must not be empty",
            ));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(Error::config_validation(
                    "logging.level",
                    "must be one of: trace, debug, info, warn, error",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_list, DEFAULT_LIST_NAME);
        assert_eq!(config.table_type, TableType::Single);
        assert!(config.database_path.ends_with(DEFAULT_DB_FILE));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.default_list = "  ".to_string();
        assert!(config.validate().is_err());

        config.default_list = "movies".to_string();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path().to_path_buf();

        let mut config = Config::default();
        config.default_list = "movies".to_string();
        config.table_type = TableType::Porcelain;

        config.save_to_path(&config_path).unwrap();
        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let loaded = Config::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), r#"{"default_list": "shows"}"#).unwrap();

        let loaded = Config::load_from_path(temp_file.path()).unwrap();
        assert_eq!(loaded.default_list, "shows");
        assert_eq!(loaded.logging.level, "warn");
    }
}
