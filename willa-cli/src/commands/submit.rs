//! Submit command implementation.
//!
//! This module implements the `submit` command, which runs a booking
//! request through the ledger's admission checks.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_principal, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use willa::{BookingProposal, ItemId, ItemKind, ItemRef, Ledger};

/// Submit a booking request.
#[derive(Args)]
pub struct SubmitCommand {
    /// Item kind (room, table, resort, plane)
    kind: ItemKind,

    /// Item id within its kind
    id: u32,

    /// Check-in date (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    start: NaiveDate,

    /// Check-out date (YYYY-MM-DD, exclusive)
    #[arg(long, value_name = "DATE")]
    end: NaiveDate,

    /// Number of guests (default: 1)
    #[arg(long, value_name = "N")]
    guests: Option<u32>,

    /// Free-form notes
    #[arg(long, value_name = "TEXT", default_value = "")]
    notes: String,
}

impl SubmitCommand {
    /// Execute the submit command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let principal = resolve_principal(global)?;

        let id = ItemId::try_from(self.id)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let item = ItemRef::new(self.kind, id);

        let proposal = BookingProposal::new(item, self.start, self.end)
            .with_guests(self.guests)
            .with_notes(self.notes);

        let catalog = db.load_catalog().map_err(CliError::from)?;
        let mut ledger = Ledger::new(&mut db, &catalog);
        let booking = ledger
            .submit(principal.as_ref(), &proposal)
            .map_err(CliError::from)?;

        println!(
            "Booked {} for {} from {} to {} ({} nights, {} guests) [id {}]",
            booking.item(),
            booking.owner(),
            booking.range().start(),
            booking.range().end(),
            booking.range().nights(),
            booking.guests(),
            booking.id(),
        );

        Ok(())
    }
}
