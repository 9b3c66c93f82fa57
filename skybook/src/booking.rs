//! Caller-side validation of booking input.
//!
//! The store persists whatever it is given. Front ends collect the six
//! fields as free text and run them through a [`BookingForm`] before calling
//! the store, which rejects blank fields and dates not in `YYYY-MM-DD` form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationDetails};

/// Date format accepted for the travel date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw, unvalidated booking input as typed by a user.
///
/// # Examples
///
/// ```
/// use skybook::BookingForm;
///
/// let form = BookingForm {
///     name: " Alice Johnson ".into(),
///     flight_number: "AA123".into(),
///     departure: "New York".into(),
///     destination: "Los Angeles".into(),
///     date: "2024-12-25".into(),
///     seat_number: "12A".into(),
/// };
///
/// let details = form.validate().unwrap();
/// assert_eq!(details.name, "Alice Johnson");
///
/// let bad = BookingForm { date: "25/12/2024".into(), ..form };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    /// Passenger name.
    pub name: String,
    /// Flight number.
    pub flight_number: String,
    /// Departure city.
    pub departure: String,
    /// Destination city.
    pub destination: String,
    /// Travel date, expected as `YYYY-MM-DD`.
    pub date: String,
    /// Seat number.
    pub seat_number: String,
}

/// Optional replacements for the fields of a [`BookingForm`].
///
/// Used when editing: fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOverrides {
    /// New passenger name.
    pub name: Option<String>,
    /// New flight number.
    pub flight_number: Option<String>,
    /// New departure city.
    pub departure: Option<String>,
    /// New destination city.
    pub destination: Option<String>,
    /// New travel date.
    pub date: Option<String>,
    /// New seat number.
    pub seat_number: Option<String>,
}

impl FormOverrides {
    /// Returns true if no field is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.flight_number.is_none()
            && self.departure.is_none()
            && self.destination.is_none()
            && self.date.is_none()
            && self.seat_number.is_none()
    }
}

impl BookingForm {
    /// Checks the form and produces the details to store.
    ///
    /// Every field is trimmed. Fields are checked in form order and the
    /// first blank one is reported; the date is checked last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the offending field if a field is
    /// empty after trimming, or if the date is not a real `YYYY-MM-DD` date.
    pub fn validate(&self) -> Result<ReservationDetails> {
        let fields = [
            ("name", &self.name),
            ("flight_number", &self.flight_number),
            ("departure", &self.departure),
            ("destination", &self.destination),
            ("date", &self.date),
            ("seat_number", &self.seat_number),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::Validation {
                    field: field.into(),
                    message: "must not be empty".into(),
                });
            }
        }

        let date = self.date.trim();
        validate_date(date)?;

        Ok(ReservationDetails::new(
            self.name.trim(),
            self.flight_number.trim(),
            self.departure.trim(),
            self.destination.trim(),
            date,
            self.seat_number.trim(),
        ))
    }

    /// Replaces the fields present in `overrides`.
    pub fn apply_overrides(&mut self, overrides: FormOverrides) {
        let FormOverrides {
            name,
            flight_number,
            departure,
            destination,
            date,
            seat_number,
        } = overrides;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(flight_number) = flight_number {
            self.flight_number = flight_number;
        }
        if let Some(departure) = departure {
            self.departure = departure;
        }
        if let Some(destination) = destination {
            self.destination = destination;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(seat_number) = seat_number {
            self.seat_number = seat_number;
        }
    }
}

impl From<ReservationDetails> for BookingForm {
    fn from(details: ReservationDetails) -> Self {
        Self {
            name: details.name,
            flight_number: details.flight_number,
            departure: details.departure,
            destination: details.destination,
            date: details.date,
            seat_number: details.seat_number,
        }
    }
}

impl From<&Reservation> for BookingForm {
    fn from(reservation: &Reservation) -> Self {
        Self::from(reservation.details().clone())
    }
}

/// Checks that `date` is a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns [`Error::Validation`] for the `date` field otherwise.
///
/// # Examples
///
/// ```
/// use skybook::booking::validate_date;
///
/// assert!(validate_date("2024-02-29").is_ok());
/// assert!(validate_date("2023-02-29").is_err());
/// assert!(validate_date("tomorrow").is_err());
/// ```
pub fn validate_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| Error::Validation {
        field: "date".into(),
        message: format!("'{date}' is not a valid date in YYYY-MM-DD format ({e})"),
    })
}
