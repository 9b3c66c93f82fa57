//! CRUD operations for reservations.
//!
//! Every operation is a single statement against the open connection.
//! Storage errors are logged where they occur and returned as
//! [`Error::WriteFailure`] or [`Error::ReadFailure`]; a missing row is never
//! an error.

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationDetails, ReservationId};

use super::connection::ReservationStore;
use super::schema::{
    COUNT_RESERVATIONS, DELETE_RESERVATION, INSERT_RESERVATION, LIST_RESERVATIONS,
    SELECT_RESERVATION, UPDATE_RESERVATION,
};

/// Index of the `created_at` column in the SELECT statements.
const CREATED_AT_COLUMN: usize = 7;

/// Parses a `CURRENT_TIMESTAMP` value (`YYYY-MM-DD HH:MM:SS`, UTC).
///
/// Fractional seconds are accepted for rows written by other tools.
fn parse_timestamp(text: &str) -> rusqlite::Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(CREATED_AT_COLUMN, Type::Text, Box::new(e))
        })
}

/// Deserializes a reservation from a database row.
///
/// Expects row fields in this order: id, name, `flight_number`, departure,
/// destination, date, `seat_number`, `created_at`
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let details = ReservationDetails {
        name: row.get(1)?,
        flight_number: row.get(2)?,
        departure: row.get(3)?,
        destination: row.get(4)?,
        date: row.get(5)?,
        seat_number: row.get(6)?,
    };
    let created_at: String = row.get(CREATED_AT_COLUMN)?;

    Ok(Reservation::new(
        ReservationId::new(id),
        details,
        parse_timestamp(&created_at)?,
    ))
}

impl ReservationStore {
    /// Inserts a new reservation and returns its id.
    ///
    /// The store assigns the id and creation time. The fields are stored as
    /// given; validating them is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteFailure`] if the insert is rejected, or
    /// [`Error::StorageUnavailable`] if the store is not open.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use skybook::store::{ReservationStore, StoreConfig};
    /// use skybook::ReservationDetails;
    ///
    /// let store = ReservationStore::open(StoreConfig::new("/tmp/flights.db")).unwrap();
    /// let details = ReservationDetails::new("Alice", "AA1", "NYC", "LAX", "2024-01-01", "1A");
    /// let id = store.create(&details).unwrap();
    /// println!("Booked reservation {id}");
    /// ```
    pub fn create(&self, details: &ReservationDetails) -> Result<ReservationId> {
        let id = self.write("create", |conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            tx.execute(
                INSERT_RESERVATION,
                params![
                    details.name,
                    details.flight_number,
                    details.departure,
                    details.destination,
                    details.date,
                    details.seat_number,
                ],
            )?;
            let id = tx.last_insert_rowid();
            tx.commit()?;
            Ok(ReservationId::new(id))
        })?;

        log::debug!("Created reservation {id} for {}", details.name);
        Ok(id)
    }

    /// Lists every reservation, most recently created first.
    ///
    /// An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadFailure`] if the query fails, or
    /// [`Error::StorageUnavailable`] if the store is not open.
    pub fn list_all(&self) -> Result<Vec<Reservation>> {
        self.read("list reservations", |conn| {
            let mut stmt = conn.prepare_cached(LIST_RESERVATIONS)?;
            let reservations = stmt
                .query_map([], row_to_reservation)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(reservations)
        })
    }

    /// Looks up a reservation by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if the reservation exists
    /// - `Ok(None)` if it doesn't
    /// - `Err(_)` if the query fails
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadFailure`] if the query fails, or
    /// [`Error::StorageUnavailable`] if the store is not open.
    pub fn get_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        self.read("fetch reservation", |conn| {
            let mut stmt = conn.prepare_cached(SELECT_RESERVATION)?;
            match stmt.query_row(params![id.value()], row_to_reservation) {
                Ok(reservation) => Ok(Some(reservation)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
    }

    /// Replaces the caller-supplied fields of a reservation.
    ///
    /// The id and creation time never change.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and updated
    /// - `Ok(false)` if no reservation has this id (nothing is written)
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteFailure`] if the update is rejected, or
    /// [`Error::StorageUnavailable`] if the store is not open.
    pub fn update(&self, id: ReservationId, details: &ReservationDetails) -> Result<bool> {
        let rows_affected = self.write("update", |conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            let rows = tx.execute(
                UPDATE_RESERVATION,
                params![
                    details.name,
                    details.flight_number,
                    details.departure,
                    details.destination,
                    details.date,
                    details.seat_number,
                    id.value(),
                ],
            )?;
            tx.commit()?;
            Ok(rows)
        })?;

        if rows_affected == 0 {
            log::debug!("Update of reservation {id} matched no rows");
        } else {
            log::debug!("Updated reservation {id}");
        }
        Ok(rows_affected > 0)
    }

    /// Deletes a reservation.
    ///
    /// Deleting an id that does not exist is a successful no-op.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and deleted
    /// - `Ok(false)` if it was not found
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteFailure`] if the delete is rejected, or
    /// [`Error::StorageUnavailable`] if the store is not open.
    pub fn delete(&self, id: ReservationId) -> Result<bool> {
        let rows_affected = self.write("delete", |conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            let rows = tx.execute(DELETE_RESERVATION, params![id.value()])?;
            tx.commit()?;
            Ok(rows)
        })?;

        log::debug!("Deleted {rows_affected} reservation(s) with id {id}");
        Ok(rows_affected > 0)
    }

    /// Returns the number of stored reservations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadFailure`] if the query fails, or
    /// [`Error::StorageUnavailable`] if the store is not open.
    pub fn count(&self) -> Result<usize> {
        self.read("count reservations", |conn| {
            conn.query_row(COUNT_RESERVATIONS, [], |row| row.get(0))
        })
    }

    fn write<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut Connection) -> rusqlite::Result<T>,
    ) -> Result<T> {
        self.with_connection(operation, |conn| {
            f(conn).map_err(|source| {
                log::error!("Error during reservation {operation}: {source}");
                Error::WriteFailure { operation, source }
            })
        })
    }

    fn read<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut Connection) -> rusqlite::Result<T>,
    ) -> Result<T> {
        self.with_connection(operation, |conn| {
            f(conn).map_err(|source| {
                log::error!("Error while trying to {operation}: {source}");
                Error::ReadFailure { operation, source }
            })
        })
    }
}
