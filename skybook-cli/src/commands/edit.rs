//! Edit command implementation.
//!
//! This module implements the `edit` command. Fields that are not given
//! keep their current values; the merged booking is validated like a new
//! one before it is written back.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use skybook::{BookingForm, Error as LibError, FormOverrides, ReservationId};

/// Change fields of an existing reservation.
#[derive(Args)]
pub struct EditCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New passenger name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// New flight number
    #[arg(long = "flight", value_name = "FLIGHT")]
    pub flight_number: Option<String>,

    /// New departure city
    #[arg(long = "from", value_name = "CITY")]
    pub departure: Option<String>,

    /// New destination city
    #[arg(long = "to", value_name = "CITY")]
    pub destination: Option<String>,

    /// New travel date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// New seat number
    #[arg(long = "seat", value_name = "SEAT")]
    pub seat_number: Option<String>,
}

impl EditCommand {
    /// Execute the edit command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id = ReservationId::new(self.id);
        let overrides = FormOverrides {
            name: self.name,
            flight_number: self.flight_number,
            departure: self.departure,
            destination: self.destination,
            date: self.date,
            seat_number: self.seat_number,
        };

        if overrides.is_empty() {
            return Err(CliError::InvalidArguments(
                "Nothing to change: pass at least one of --name, --flight, --from, --to, --date, --seat"
                    .to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let store = open_store(&config)?;

        let current = store.get_by_id(id)?.ok_or(LibError::NotFound { id })?;
        let mut form = BookingForm::from(&current);
        form.apply_overrides(overrides);
        let details = form.validate()?;

        // The row can vanish between the lookup and the write
        if !store.update(id, &details)? {
            return Err(LibError::NotFound { id }.into());
        }
        store.shutdown()?;

        if !global.quiet {
            eprintln!("Updated reservation {id}");
        }

        Ok(())
    }
}
