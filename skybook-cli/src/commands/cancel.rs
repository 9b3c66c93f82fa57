//! Cancel command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use skybook::ReservationId;

/// Cancel (delete) a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,
}

impl CancelCommand {
    /// Execute the cancel command.
    ///
    /// Cancelling an id that does not exist succeeds and says so.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id = ReservationId::new(self.id);
        let config = load_configuration(global)?;
        let store = open_store(&config)?;

        let deleted = store.delete(id)?;
        store.shutdown()?;

        if !global.quiet {
            if deleted {
                eprintln!("Cancelled reservation {id}");
            } else {
                eprintln!("No reservation with id {id}; nothing to cancel");
            }
        }

        Ok(())
    }
}
