//! Dashboard command implementation.
//!
//! This module implements the `dashboard` command, which prints the
//! trailing-window occupancy summary.

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use willa::{DashboardSummary, Reporter};

/// Show the occupancy dashboard.
#[derive(Args)]
pub struct DashboardCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "WILLA_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for dashboard command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    Table,
    /// JSON format
    Json,
}

impl DashboardCommand {
    /// Execute the dashboard command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let catalog = db.load_catalog().map_err(CliError::from)?;
        let reporter = Reporter::new(&db, &catalog);
        let summary = reporter.summarize().map_err(CliError::from)?;

        match self.format {
            OutputFormat::Table => format_as_table(&summary)?,
            OutputFormat::Json => format_as_json(&summary)?,
        }

        Ok(())
    }
}

/// Format the summary for human consumption.
fn format_as_table(summary: &DashboardSummary) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "Rooms:          {}", summary.total_rooms)?;
    writeln!(handle, "Resorts:        {}", summary.total_resorts)?;
    writeln!(handle, "Bookings:       {}", summary.total_bookings)?;
    writeln!(handle, "Occupancy rate: {}%", summary.occupancy_rate)?;
    writeln!(handle)?;
    writeln!(handle, "Recent bookings:")?;

    if summary.recent_bookings.is_empty() {
        writeln!(handle, "  (none)")?;
    }
    for recent in &summary.recent_bookings {
        let booking = &recent.booking;
        writeln!(
            handle,
            "  [{}] {} {} {} to {} ({}) {}",
            booking.id(),
            booking.item(),
            recent.item_name.as_deref().unwrap_or("-"),
            booking.range().start(),
            booking.range().end(),
            booking.status(),
            format_timestamp(booking.created_at()),
        )?;
    }

    Ok(())
}

/// Format the summary as JSON.
fn format_as_json(summary: &DashboardSummary) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, summary)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}
