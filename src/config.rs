//! Configuration loading and validation.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config`, or `~/.config/typed-import/config.toml` when present)
//! 3. Environment variables (`TYPED_IMPORT_STORE`, `TYPED_IMPORT_LOG`)
//! 4. Command-line flags, applied by the CLI

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, ENV_LOG_LEVEL, ENV_STORE_PATH, LOG_LEVELS,
};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON snapshot backing the store; `None` keeps the store in memory only
    pub store_path: Option<PathBuf>,

    /// Default log level when neither `-v`/`-q` nor `RUST_LOG` is given
    pub log_level: String,

    /// Roll back every import unless `--commit` is given
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Load defaults, then the config file, then environment overrides
    ///
    /// An explicit `config_path` must exist; the default location is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|path| path.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config = Self::from_toml(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `~/.config/typed-import/config.toml` on Linux, the platform equivalent elsewhere
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(store_path) = lookup(ENV_STORE_PATH).filter(|v| !v.is_empty()) {
            self.store_path = Some(PathBuf::from(store_path));
        }
        if let Some(log_level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            self.log_level = log_level;
        }
    }

    pub fn with_store_path(mut self, store_path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(store_path.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}'; expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        if self
            .store_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(Error::configuration("Store path must not be empty"));
        }

        Ok(())
    }
}
