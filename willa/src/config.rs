//! Application configuration.
//!
//! Configuration is merged from three sources with increasing precedence:
//! built-in defaults, an optional YAML file (`config.yaml` in the data
//! directory, or an explicit path), and `WILLA_*` environment variables.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::database::default_data_dir;
use crate::error::{Error, Result};

/// Default busy timeout in seconds when nothing overrides it.
pub const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

/// Resolved application configuration.
///
/// # Examples
///
/// ```
/// use willa::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// assert!(config.busy_timeout().as_secs() >= 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the reservation database.
    pub data_dir: Option<PathBuf>,
    /// Busy timeout for database lock contention, in seconds.
    pub busy_timeout_seconds: Option<u64>,
}

impl Config {
    /// Returns the effective busy timeout.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_seconds.unwrap_or(DEFAULT_BUSY_TIMEOUT_SECS))
    }
}

/// Builder merging configuration sources.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    busy_timeout_seconds: Option<u64>,
}

impl ConfigBuilder {
    /// Creates a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit configuration file path.
    ///
    /// Without this, `config.yaml` inside the data directory is read when
    /// it exists.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Sets the data directory, taking precedence over file and
    /// environment values.
    #[must_use]
    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.data_dir = dir;
        self
    }

    /// Sets the busy timeout in seconds, taking precedence over file and
    /// environment values.
    #[must_use]
    pub const fn with_busy_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.busy_timeout_seconds = seconds;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be
    /// read or parsed, or an environment override has an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(path) = self.config_file_path() {
            if path.exists() {
                config = load_config_file(&path)?;
            }
        }

        apply_env_overrides(
            &mut config,
            env::var("WILLA_DATA_DIR").ok(),
            env::var("WILLA_BUSY_TIMEOUT").ok(),
        )?;

        // Builder overrides win over file and environment.
        if self.data_dir.is_some() {
            config.data_dir = self.data_dir;
        }
        if self.busy_timeout_seconds.is_some() {
            config.busy_timeout_seconds = self.busy_timeout_seconds;
        }

        Ok(config)
    }

    fn config_file_path(&self) -> Option<PathBuf> {
        if let Some(ref file) = self.file {
            return Some(file.clone());
        }
        let dir = self
            .data_dir
            .clone()
            .or_else(|| default_data_dir().ok())?;
        Some(dir.join("config.yaml"))
    }
}

fn load_config_file(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&text)?;
    Ok(config)
}

fn apply_env_overrides(
    config: &mut Config,
    data_dir: Option<String>,
    busy_timeout: Option<String>,
) -> Result<()> {
    if let Some(dir) = data_dir {
        config.data_dir = Some(PathBuf::from(dir));
    }
    if let Some(value) = busy_timeout {
        let seconds = value.parse::<u64>().map_err(|_| Error::Validation {
            field: "WILLA_BUSY_TIMEOUT".into(),
            message: format!("expected a number of seconds, got '{value}'"),
        })?;
        config.busy_timeout_seconds = Some(seconds);
    }
    Ok(())
}
