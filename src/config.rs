//! Configuration module for coursecat
//!
//! Manages user preferences such as the catalog opened by default and the
//! initial sort order of `list`. Configuration is stored in the user's config
//! directory and can be overridden with `COURSECAT_*` environment variables.

use crate::sort::SortKey;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog opened when no file is given on the command line
    #[serde(default)]
    pub default_file: Option<PathBuf>,

    /// Sort key used by `list` when `--sort` is omitted
    #[serde(default)]
    pub default_sort: SortKey,

    /// Log file location; defaults to the user's data directory
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl CatalogConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("coursecat").join("config.toml"))
    }

    /// Load configuration from the user's config file
    ///
    /// A missing file yields the defaults; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, layered under the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("COURSECAT"))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the user's config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the catalog to open: the explicit path wins over the default
    #[must_use]
    pub fn resolve_file(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| self.default_file.clone())
    }

    /// Resolve the sort key: the explicit key wins over the default
    #[must_use]
    pub fn resolve_sort(&self, explicit: Option<SortKey>) -> SortKey {
        explicit.unwrap_or(self.default_sort)
    }
}
