//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the willa data directory and database.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;
use willa::database::{default_data_dir, DATABASE_FILE_NAME};
use willa::{Database, DatabaseConfig};

/// Initialize willa data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// Note: This command ignores --disable-autoinit (would be paradoxical).
    /// The --data-dir flag has a different meaning here (where to create,
    /// not where to find).
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Priority: command flag > global flag > default
        let data_dir = self
            .data_dir
            .or_else(|| global.data_dir.clone())
            .or_else(|| default_data_dir().ok())
            .ok_or_else(|| {
                CliError::Config(
                    "Could not determine data directory (home directory not found)".to_string(),
                )
            })?;

        let db_path = data_dir.join(DATABASE_FILE_NAME);
        let existed = db_path.exists();

        // Opening creates the directory, the database file, and the schema
        let _db = Database::open(DatabaseConfig::new(&db_path)).map_err(CliError::from)?;

        println!("Initialized willa in: {}", data_dir.display());
        if existed {
            println!("  - Database already exists (schema verified)");
        } else {
            println!("  - Created database: {}", db_path.display());
        }

        Ok(())
    }
}
