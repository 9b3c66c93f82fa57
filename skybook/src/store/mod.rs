//! Persistent storage of flight reservations.
//!
//! This module provides a SQLite-backed [`ReservationStore`] owning the single
//! `reservations` table, with lazy schema creation and CRUD operations keyed
//! by a store-assigned id.
//!
//! # Examples
//!
//! ```no_run
//! use skybook::store::{ReservationStore, StoreConfig};
//! use skybook::ReservationDetails;
//!
//! // Open a store
//! let store = ReservationStore::open(StoreConfig::new("/tmp/flights.db")).unwrap();
//!
//! // Book a flight
//! let details = ReservationDetails::new("Alice", "AA1", "NYC", "LAX", "2024-01-01", "1A");
//! let id = store.create(&details).unwrap();
//!
//! // List all reservations, newest first
//! for reservation in store.list_all().unwrap() {
//!     println!("{reservation}");
//! }
//!
//! store.delete(id).unwrap();
//! store.shutdown().unwrap();
//! ```

mod config;
mod connection;
mod operations;
mod schema;

// Run with `--features property-tests`
#[cfg(all(test, feature = "property-tests"))]
mod proptests;
#[cfg(test)]
pub(crate) mod test_util;

pub use config::{StoreConfig, DATABASE_ENV_VAR, DEFAULT_DATABASE_FILE, MAX_BUSY_TIMEOUT};
pub use connection::ReservationStore;
