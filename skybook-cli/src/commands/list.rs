//! List command implementation.
//!
//! This module implements the `list` command, which displays every
//! reservation, newest first, in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::output::write_reservations;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use skybook::OutputFormat;

/// List all reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format: table, json, csv or tsv (default: from configuration, else table)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Only show reservations on this flight
    #[arg(long, value_name = "FLIGHT")]
    pub filter_flight: Option<String>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(&config)?;

        let mut reservations = store.list_all()?;
        store.shutdown()?;

        if let Some(ref flight) = self.filter_flight {
            reservations.retain(|r| r.flight_number().eq_ignore_ascii_case(flight));
        }

        let format = self.format.unwrap_or_else(|| config.output_format());
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_reservations(&mut handle, &reservations, format)
    }
}
