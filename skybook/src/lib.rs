#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # skybook
//!
//! A library for storing and managing flight reservations.
//!
//! This library provides a SQLite-backed reservation store together with the
//! caller-side validation, configuration and logging that front ends need.
//!
//! ## Core Types
//!
//! - [`ReservationStore`] and [`StoreConfig`]: The persistent store
//! - [`Reservation`], [`ReservationDetails`] and [`ReservationId`]: Stored records
//! - [`BookingForm`]: Validation of user-entered bookings
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use skybook::{BookingForm, ReservationStore, StoreConfig};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = ReservationStore::open(StoreConfig::new(dir.path().join("flights.db"))).unwrap();
//!
//! let form = BookingForm {
//!     name: "Alice Johnson".into(),
//!     flight_number: "AA123".into(),
//!     departure: "New York".into(),
//!     destination: "Los Angeles".into(),
//!     date: "2024-12-25".into(),
//!     seat_number: "12A".into(),
//! };
//!
//! let id = store.create(&form.validate().unwrap()).unwrap();
//! let loaded = store.get_by_id(id).unwrap().unwrap();
//! assert_eq!(loaded.name(), "Alice Johnson");
//! ```

pub mod booking;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod reservation;
pub mod store;

// Re-export key types at crate root for convenience
pub use booking::{BookingForm, FormOverrides};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use demo::{demo_reservations, seed_demo_data};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{Reservation, ReservationDetails, ReservationId};
pub use store::{ReservationStore, StoreConfig};
