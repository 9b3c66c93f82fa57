//! Sample reservations for trying out a fresh store.

use crate::error::Result;
use crate::reservation::{ReservationDetails, ReservationId};
use crate::store::ReservationStore;

/// The bundled sample bookings, in insertion order.
const DEMO_BOOKINGS: [[&str; 6]; 8] = [
    ["Alice Johnson", "AA123", "New York", "Los Angeles", "2024-12-25", "12A"],
    ["Bob Smith", "DL456", "Atlanta", "Seattle", "2024-12-26", "8C"],
    ["Carol Davis", "UA789", "Chicago", "Miami", "2024-12-27", "15F"],
    ["David Wilson", "SW321", "Dallas", "Las Vegas", "2024-12-28", "22B"],
    ["Emma Brown", "BA654", "London", "Paris", "2024-12-29", "7A"],
    ["Frank Miller", "LH987", "Frankfurt", "Berlin", "2024-12-30", "11D"],
    ["Grace Taylor", "AF147", "Paris", "Rome", "2024-12-31", "9C"],
    ["Henry Anderson", "KL258", "Amsterdam", "Barcelona", "2025-01-01", "14E"],
];

/// Returns the sample reservations.
#[must_use]
pub fn demo_reservations() -> Vec<ReservationDetails> {
    DEMO_BOOKINGS
        .iter()
        .map(|[name, flight, departure, destination, date, seat]| {
            ReservationDetails::new(*name, *flight, *departure, *destination, *date, *seat)
        })
        .collect()
}

/// Books every sample reservation into `store`.
///
/// Returns the assigned ids in insertion order.
///
/// # Errors
///
/// Stops at, and returns, the first store error. Reservations created
/// before the failure stay in the store.
pub fn seed_demo_data(store: &ReservationStore) -> Result<Vec<ReservationId>> {
    let demo = demo_reservations();
    let mut ids = Vec::with_capacity(demo.len());

    for (i, details) in demo.iter().enumerate() {
        let id = store.create(details)?;
        log::info!(
            "Added demo reservation {}/{}: {} - {}",
            i + 1,
            demo.len(),
            details.name,
            details.flight_number
        );
        ids.push(id);
    }

    Ok(ids)
}
