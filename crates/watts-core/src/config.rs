//! # Store Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     WATTS_STORE_NAME="Downtown Branch"                                 │
//! │     WATTS_STOCK_CAPACITY=10                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/watts-up/store.toml (Linux)                              │
//! │     ~/Library/Application Support/com.watts.up/store.toml (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     "Watts Up Electronics", capacity 10                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # store.toml
//! name = "Watts Up Electronics"
//! stock_capacity = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::validation::{validate_stock_capacity, validate_store_name};
use crate::{DEFAULT_STOCK_CAPACITY, DEFAULT_STORE_NAME};

const ENV_STORE_NAME: &str = "WATTS_STORE_NAME";
const ENV_STOCK_CAPACITY: &str = "WATTS_STOCK_CAPACITY";

fn default_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

fn default_stock_capacity() -> usize {
    DEFAULT_STOCK_CAPACITY
}

/// Store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name of the store.
    #[serde(default = "default_name")]
    pub name: String,

    /// Maximum number of stock entries.
    #[serde(default = "default_stock_capacity")]
    pub stock_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            name: default_name(),
            stock_capacity: default_stock_capacity(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`store.toml`)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist. The platform default path is
    /// optional and skipped when absent.
    pub fn load(config_path: Option<PathBuf>) -> CoreResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config file without env overrides or validation.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        info!(?path, "Loading store config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CoreResult<()> {
        validate_store_name(&self.name)?;
        validate_stock_capacity(self.stock_capacity)?;
        Ok(())
    }

    /// Applies `WATTS_*` overrides, reading each variable through `var`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(name) = var(ENV_STORE_NAME) {
            debug!(name = %name, "Overriding store name from environment");
            self.name = name;
        }

        if let Some(capacity) = var(ENV_STOCK_CAPACITY) {
            match capacity.parse::<usize>() {
                Ok(c) => {
                    debug!(capacity = c, "Overriding stock capacity from environment");
                    self.stock_capacity = c;
                }
                Err(_) => warn!(value = %capacity, "Ignoring non-numeric stock capacity in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "watts", "up")
            .map(|dirs| dirs.config_dir().join("store.toml"))
    }
}

impl TryFrom<&str> for StoreConfig {
    type Error = CoreError;

    /// Parses and validates an inline TOML document.
    fn try_from(contents: &str) -> CoreResult<Self> {
        let config: StoreConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.name, "Watts Up Electronics");
        assert_eq!(config.stock_capacity, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = StoreConfig::try_from("name = \"Downtown Branch\"").unwrap();
        assert_eq!(config.name, "Downtown Branch");
        assert_eq!(config.stock_capacity, DEFAULT_STOCK_CAPACITY);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = StoreConfig::try_from("stock_capacity = 0").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = StoreConfig::try_from("name = \"\"").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = StoreConfig::try_from("stock_capacity = \"ten\"").unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"Uptown\"\nstock_capacity = 4").unwrap();

        let config = StoreConfig::from_file(file.path()).unwrap();
        assert_eq!(config.name, "Uptown");
        assert_eq!(config.stock_capacity, 4);
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StoreConfig::from_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stock_capacity = 12").unwrap();

        let config = StoreConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.stock_capacity, 12);
    }

    #[test]
    fn test_load_from_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = StoreConfig::load(Some(dir.path().join("typo.toml"))).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    fn file_config() -> StoreConfig {
        StoreConfig::try_from("name = \"Uptown\"\nstock_capacity = 4").unwrap()
    }

    #[test]
    fn test_env_name_overrides_file() {
        let mut config = file_config();
        config.apply_overrides(|key| (key == ENV_STORE_NAME).then(|| "Downtown".to_string()));
        assert_eq!(config.name, "Downtown");
        assert_eq!(config.stock_capacity, 4);
    }

    #[test]
    fn test_env_capacity_overrides_file() {
        let mut config = file_config();
        config.apply_overrides(|key| (key == ENV_STOCK_CAPACITY).then(|| "7".to_string()));
        assert_eq!(config.name, "Uptown");
        assert_eq!(config.stock_capacity, 7);
    }

    #[test]
    fn test_non_numeric_env_capacity_is_ignored() {
        let mut config = file_config();
        config.apply_overrides(|key| (key == ENV_STOCK_CAPACITY).then(|| "ten".to_string()));
        assert_eq!(config.stock_capacity, 4);
    }

    #[test]
    fn test_no_env_leaves_file_values() {
        let mut config = file_config();
        config.apply_overrides(|_| None);
        assert_eq!(config, file_config());
    }

    #[test]
    fn test_load_or_default_falls_back_on_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stock_capacity = 0").unwrap();

        let config = StoreConfig::load_or_default(Some(file.path().to_path_buf()));
        assert_eq!(config, StoreConfig::default());
    }
}
