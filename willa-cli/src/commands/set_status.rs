//! Set-status command implementation.
//!
//! This module implements the `set-status` command, an administrative
//! status transition for an existing booking.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, require_principal, GlobalOptions};
use clap::Args;
use willa::BookingStatus;

/// Change the status of a booking.
#[derive(Args)]
pub struct SetStatusCommand {
    /// Booking id
    id: i64,

    /// New status (pending, confirmed, cancelled)
    status: BookingStatus,
}

impl SetStatusCommand {
    /// Execute the set-status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let principal = require_principal(global)?;
        if !principal.is_privileged() {
            return Err(CliError::InvalidArguments(
                "changing booking status requires --admin".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let booking = db
            .set_booking_status(self.id, self.status)
            .map_err(CliError::from)?;

        println!(
            "Booking {} is now {} ({} from {} to {})",
            booking.id(),
            booking.status(),
            booking.item(),
            booking.range().start(),
            booking.range().end(),
        );

        Ok(())
    }
}
