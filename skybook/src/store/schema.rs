//! Database schema definitions and SQL constants.
//!
//! This module contains the table definition and every SQL statement the
//! reservation store executes.

/// SQL statement to create the reservations table.
///
/// `AUTOINCREMENT` keeps ids strictly increasing and prevents reuse of the
/// id of a deleted row. `created_at` is filled in by the engine.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        flight_number TEXT NOT NULL,
        departure TEXT NOT NULL,
        destination TEXT NOT NULL,
        date TEXT NOT NULL,
        seat_number TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

/// SQL statement to check whether the reservations table exists.
pub const RESERVATIONS_TABLE_EXISTS: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'reservations'";

/// SQL statement to insert a reservation; id and `created_at` are assigned by the engine.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (name, flight_number, departure, destination, date, seat_number)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

/// SQL statement to list every reservation, newest first.
///
/// `created_at` only has second precision, so rows created within the same
/// second fall back to id order.
pub const LIST_RESERVATIONS: &str = r"
    SELECT id, name, flight_number, departure, destination, date, seat_number, created_at
    FROM reservations
    ORDER BY created_at DESC, id DESC
";

/// SQL statement to fetch a single reservation by id.
pub const SELECT_RESERVATION: &str = r"
    SELECT id, name, flight_number, departure, destination, date, seat_number, created_at
    FROM reservations
    WHERE id = ?1
";

/// SQL statement to replace the mutable fields of a reservation.
pub const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET name = ?1, flight_number = ?2, departure = ?3, destination = ?4, date = ?5, seat_number = ?6
    WHERE id = ?7
";

/// SQL statement to delete a reservation by id.
pub const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?1";

/// SQL statement to count stored reservations.
pub const COUNT_RESERVATIONS: &str = "SELECT COUNT(*) FROM reservations";
