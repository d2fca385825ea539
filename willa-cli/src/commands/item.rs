//! Item command implementation.
//!
//! This module implements the `item` command group for managing the
//! catalog of bookable inventory.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::{Args, Subcommand};
use std::io::Write;
use willa::{CatalogEntry, ItemKind};

/// Manage the bookable item catalog.
#[derive(Args)]
pub struct ItemCommand {
    #[command(subcommand)]
    command: ItemSubcommand,
}

/// Catalog subcommands.
#[derive(Subcommand)]
enum ItemSubcommand {
    /// Add an item to the catalog
    Add(AddItemCommand),

    /// List catalog items
    List(ListItemsCommand),
}

/// Add an item to the catalog.
#[derive(Args)]
struct AddItemCommand {
    /// Item kind (room, table, resort, plane)
    kind: ItemKind,

    /// Display name (room number, table name, resort title, seat class)
    name: String,
}

/// List catalog items.
#[derive(Args)]
struct ListItemsCommand {}

impl ItemCommand {
    /// Execute the item command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.command {
            ItemSubcommand::Add(cmd) => cmd.execute(global),
            ItemSubcommand::List(cmd) => cmd.execute(global),
        }
    }
}

impl AddItemCommand {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let entry = db
            .add_catalog_item(self.kind, &self.name)
            .map_err(CliError::from)?;

        println!(
            "Added {} ({})",
            entry.item,
            entry.display_name().unwrap_or_else(|| "-".to_string())
        );

        Ok(())
    }
}

impl ListItemsCommand {
    fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let catalog = db.load_catalog().map_err(CliError::from)?;
        let mut entries: Vec<&CatalogEntry> = catalog.iter().collect();
        entries.sort_by_key(|e| (e.item.kind.as_str(), e.item.id.value()));

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        writeln!(handle, "KIND\tID\tNAME")?;
        for entry in entries {
            writeln!(
                handle,
                "{}\t{}\t{}",
                entry.item.kind,
                entry.item.id,
                entry.display_name().unwrap_or_else(|| "-".to_string()),
            )?;
        }

        Ok(())
    }
}
