//! List command implementation.
//!
//! This module implements the `list` command, which displays bookings
//! visible to the acting principal in table or JSON format.

use crate::error::CliError;
use crate::utils::{
    format_timestamp, load_configuration, open_database, require_principal, GlobalOptions,
};
use clap::{Args, ValueEnum};
use std::io::Write;
use willa::{Booking, BookingStatus, Ledger};

/// Column headers for table output.
const COLUMN_HEADERS: [&str; 8] = [
    "id", "item", "owner", "start", "end", "guests", "status", "created_at",
];

/// List bookings.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "WILLA_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Filter by status
    #[arg(long, value_name = "STATUS")]
    pub filter_status: Option<BookingStatus>,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let principal = require_principal(global)?;

        let catalog = db.load_catalog().map_err(CliError::from)?;
        let ledger = Ledger::new(&mut db, &catalog);
        let mut bookings = ledger.list(&principal).map_err(CliError::from)?;

        if let Some(status) = self.filter_status {
            bookings.retain(|b| b.status() == status);
        }

        match self.format {
            OutputFormat::Table => format_as_table(&bookings)?,
            OutputFormat::Json => format_as_json(&bookings)?,
        }

        Ok(())
    }
}

/// Format bookings as a human-readable table.
fn format_as_table(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for booking in bookings {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            booking.id(),
            booking.item(),
            booking.owner(),
            booking.range().start(),
            booking.range().end(),
            booking.guests(),
            booking.status(),
            format_timestamp(booking.created_at()),
        )?;
    }

    Ok(())
}

/// Format bookings as JSON.
fn format_as_json(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, bookings)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}
