//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, principal
//! resolution, and output formatting.

use crate::error::CliError;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use willa::database::resolve_database_path;
use willa::{Config, ConfigBuilder, Database, DatabaseConfig, Principal};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Acting user identifier.
    pub user: Option<String>,

    /// Act with staff privileges.
    pub admin: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .with_data_dir(global.data_dir.clone())
        .with_busy_timeout_seconds(global.busy_timeout.map(u64::from))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(config.data_dir.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))?;

    if !db_path.exists() && global.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let db_config = DatabaseConfig::new(db_path).with_busy_timeout(config.busy_timeout());

    Database::open(db_config).map_err(CliError::from)
}

/// Resolve the acting principal from global options.
///
/// Returns `None` when no `--user` was supplied; commands that require
/// a principal surface that through the library's authentication error.
pub fn resolve_principal(global: &GlobalOptions) -> Result<Option<Principal>, CliError> {
    let Some(ref user) = global.user else {
        return Ok(None);
    };

    let principal = Principal::new(user.clone())
        .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

    Ok(Some(if global.admin {
        principal.privileged()
    } else {
        principal
    }))
}

/// Resolve a principal, erroring when none is configured.
pub fn require_principal(global: &GlobalOptions) -> Result<Principal, CliError> {
    resolve_principal(global)?.ok_or_else(|| {
        CliError::InvalidArguments("a user is required (use --user or WILLA_USER)".to_string())
    })
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
