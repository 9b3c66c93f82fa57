//! Book command implementation.
//!
//! This module implements the `book` command, which validates the entered
//! booking details and stores a new reservation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use skybook::BookingForm;

/// Book a new flight reservation.
#[derive(Args)]
pub struct BookCommand {
    /// Passenger name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Flight number
    #[arg(long = "flight", value_name = "FLIGHT")]
    pub flight_number: String,

    /// Departure city
    #[arg(long = "from", value_name = "CITY")]
    pub departure: String,

    /// Destination city
    #[arg(long = "to", value_name = "CITY")]
    pub destination: String,

    /// Travel date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Seat number
    #[arg(long = "seat", value_name = "SEAT")]
    pub seat_number: String,
}

impl BookCommand {
    /// Execute the book command.
    ///
    /// Prints the id of the new reservation to stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let form = BookingForm {
            name: self.name,
            flight_number: self.flight_number,
            departure: self.departure,
            destination: self.destination,
            date: self.date,
            seat_number: self.seat_number,
        };
        let details = form.validate()?;

        let config = load_configuration(global)?;
        let store = open_store(&config)?;
        let id = store.create(&details)?;
        store.shutdown()?;

        if !global.quiet {
            eprintln!(
                "Booked {} on {} ({} -> {}) {} seat {}",
                details.name,
                details.flight_number,
                details.departure,
                details.destination,
                details.date,
                details.seat_number
            );
        }
        println!("{id}");

        Ok(())
    }
}
