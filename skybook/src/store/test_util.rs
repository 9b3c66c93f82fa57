//! Shared test utilities for store unit tests.
//!
//! This module provides helper functions used across multiple store test modules.

use tempfile::{tempdir, TempDir};

use crate::reservation::ReservationDetails;
use crate::store::{ReservationStore, StoreConfig};

/// Creates an open store in a temporary directory.
///
/// The store file is `test.db` inside the returned directory, which must be
/// kept alive for as long as the store is used.
///
/// # Panics
///
/// Panics if the temporary directory or store cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_store() -> (TempDir, ReservationStore) {
    let dir = tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("test.db"));
    let store = ReservationStore::open(config).unwrap();
    (dir, store)
}

/// Creates reservation details for the given passenger with fixed flight data.
#[must_use]
pub fn sample_details(name: &str) -> ReservationDetails {
    ReservationDetails::new(name, "AA1", "NYC", "LAX", "2024-01-01", "1A")
}
