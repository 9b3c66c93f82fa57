//! Reservation types for tracking booked flight segments.
//!
//! A [`Reservation`] is one stored row: the store-assigned [`ReservationId`]
//! and creation time, plus the six caller-supplied [`ReservationDetails`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a reservation.
///
/// Ids are assigned on creation, strictly increase across creations and are
/// never reused, even after the row they named has been deleted.
///
/// # Examples
///
/// ```
/// use skybook::ReservationId;
///
/// let id = ReservationId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for ReservationId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The caller-supplied fields of a reservation.
///
/// The store persists these verbatim. Checking that they are non-empty and
/// that `date` is a `YYYY-MM-DD` string is the caller's job; see
/// [`BookingForm`](crate::booking::BookingForm).
///
/// # Examples
///
/// ```
/// use skybook::ReservationDetails;
///
/// let details = ReservationDetails::new("Alice", "AA1", "NYC", "LAX", "2024-01-01", "1A");
/// assert_eq!(details.flight_number, "AA1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationDetails {
    /// Passenger name.
    pub name: String,
    /// Flight number.
    pub flight_number: String,
    /// Departure city or location label.
    pub departure: String,
    /// Destination city or location label.
    pub destination: String,
    /// Travel date, `YYYY-MM-DD`.
    pub date: String,
    /// Seat number.
    pub seat_number: String,
}

impl ReservationDetails {
    /// Creates a details record from its six fields, in form order.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        flight_number: impl Into<String>,
        departure: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
        seat_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            flight_number: flight_number.into(),
            departure: departure.into(),
            destination: destination.into(),
            date: date.into(),
            seat_number: seat_number.into(),
        }
    }
}

/// A stored flight reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    #[serde(flatten)]
    details: ReservationDetails,
    created_at: DateTime<Utc>,
}

impl Reservation {
    /// Assembles a reservation from stored parts.
    #[must_use]
    pub const fn new(
        id: ReservationId,
        details: ReservationDetails,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            details,
            created_at,
        }
    }

    /// Returns the store-assigned id.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the caller-supplied fields.
    #[must_use]
    pub const fn details(&self) -> &ReservationDetails {
        &self.details
    }

    /// Consumes the reservation, returning its caller-supplied fields.
    #[must_use]
    pub fn into_details(self) -> ReservationDetails {
        self.details
    }

    /// Returns the passenger name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.details.name
    }

    /// Returns the flight number.
    #[must_use]
    pub fn flight_number(&self) -> &str {
        &self.details.flight_number
    }

    /// Returns the departure location.
    #[must_use]
    pub fn departure(&self) -> &str {
        &self.details.departure
    }

    /// Returns the destination.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.details.destination
    }

    /// Returns the travel date string.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.details.date
    }

    /// Returns the seat number.
    #[must_use]
    pub fn seat_number(&self) -> &str {
        &self.details.seat_number
    }

    /// Returns when the store created this reservation.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} on {} ({} -> {}) {} seat {}",
            self.id,
            self.details.name,
            self.details.flight_number,
            self.details.departure,
            self.details.destination,
            self.details.date,
            self.details.seat_number,
        )
    }
}
