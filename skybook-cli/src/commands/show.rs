//! Show command implementation.

use crate::error::CliError;
use crate::output::write_reservation;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use skybook::{Error as LibError, OutputFormat, ReservationId};

/// Show a single reservation.
#[derive(Args)]
pub struct ShowCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output format: table, json, csv or tsv (default: from configuration, else table)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ShowCommand {
    /// Execute the show command.
    ///
    /// Fails with exit code 1 if no reservation has the given id.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id = ReservationId::new(self.id);
        let config = load_configuration(global)?;
        let store = open_store(&config)?;

        let reservation = store.get_by_id(id)?.ok_or(LibError::NotFound { id })?;
        store.shutdown()?;

        let format = self.format.unwrap_or_else(|| config.output_format());
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_reservation(&mut handle, &reservation, format)
    }
}
