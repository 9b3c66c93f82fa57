//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the skybook library.

use std::path::PathBuf;

use skybook::{ReservationDetails, ReservationStore, StoreConfig};
use tempfile::TempDir;

/// Opens a store backed by a file in a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped, so keep
/// it alive for as long as the store is used.
#[allow(dead_code)]
pub fn open_test_store() -> (TempDir, ReservationStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = ReservationStore::open(StoreConfig::new(dir.path().join("flights.db"))).unwrap();
    (dir, store)
}

/// Returns the path a test store would use inside `dir`.
#[allow(dead_code)]
pub fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("flights.db")
}

/// Builder for reservation details with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::DetailsFixture;
/// let details = DetailsFixture::new("Alice")
///     .with_flight("AA123")
///     .build();
/// ```
#[allow(dead_code)]
pub struct DetailsFixture {
    name: String,
    flight_number: String,
    departure: String,
    destination: String,
    date: String,
    seat_number: String,
}

#[allow(dead_code)]
impl DetailsFixture {
    /// Creates a fixture for `name` on a default flight.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            flight_number: "AA123".to_string(),
            departure: "New York".to_string(),
            destination: "Los Angeles".to_string(),
            date: "2024-12-25".to_string(),
            seat_number: "12A".to_string(),
        }
    }

    /// Sets the flight number.
    pub fn with_flight(mut self, flight: &str) -> Self {
        self.flight_number = flight.to_string();
        self
    }

    /// Sets the route.
    pub fn with_route(mut self, from: &str, to: &str) -> Self {
        self.departure = from.to_string();
        self.destination = to.to_string();
        self
    }

    /// Sets the travel date.
    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    /// Sets the seat.
    pub fn with_seat(mut self, seat: &str) -> Self {
        self.seat_number = seat.to_string();
        self
    }

    /// Builds the details.
    pub fn build(self) -> ReservationDetails {
        ReservationDetails::new(
            self.name,
            self.flight_number,
            self.departure,
            self.destination,
            self.date,
            self.seat_number,
        )
    }
}
