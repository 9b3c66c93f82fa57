//! Error types for the skybook library.
//!
//! This module provides the error hierarchy for store operations, caller-side
//! validation and configuration, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::reservation::ReservationId;

/// Result type alias for operations that may fail with a skybook error.
///
/// # Examples
///
/// ```
/// use skybook::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the skybook library.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing store could not be opened or its schema could not be created.
    #[error("cannot open reservation store {}: {source}", path.display())]
    ConnectionFailure {
        /// Path of the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An operation was attempted on a store that is not open.
    #[error("reservation store is unavailable (not initialized or already shut down)")]
    StorageUnavailable,

    /// An insert, update or delete was rejected by the backing engine.
    #[error("failed to {operation} reservation: {source}")]
    WriteFailure {
        /// The write operation that failed.
        operation: &'static str,
        /// The underlying database error.
        #[source]
        source: rusqlite::Error,
    },

    /// A query failed to execute.
    #[error("failed to {operation}: {source}")]
    ReadFailure {
        /// The read operation that failed.
        operation: &'static str,
        /// The underlying database error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database error outside the CRUD paths occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller-supplied value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested reservation does not exist.
    #[error("reservation {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: ReservationId,
    },
}

impl Error {
    /// Check if the error means the store was never opened or is closed.
    ///
    /// # Examples
    ///
    /// ```
    /// use skybook::Error;
    ///
    /// assert!(Error::StorageUnavailable.is_unavailable());
    /// ```
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable | Self::ConnectionFailure { .. }
        )
    }

    /// Check if the error was caused by lock contention on the store file.
    ///
    /// This includes failing to open a store whose file stayed locked.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        let source = match self {
            Self::WriteFailure { source, .. }
            | Self::ReadFailure { source, .. }
            | Self::Database(source) => source,
            Self::ConnectionFailure { source, .. } => {
                return source.downcast_ref::<Self>().is_some_and(Self::is_busy);
            }
            _ => return false,
        };
        matches!(
            source.sqlite_error_code(),
            Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failure_error() {
        let err = Error::ConnectionFailure {
            path: PathBuf::from("/missing/flights.db"),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such directory",
            )),
        };
        let display = format!("{err}");
        assert!(display.contains("cannot open reservation store"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/missing/flights.db"));
        assert!(display.contains("no such directory"));
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_storage_unavailable_error() {
        let display = format!("{}", Error::StorageUnavailable);
        assert!(display.contains("unavailable"));
    }

    #[test]
    fn test_write_failure_error() {
        let err = Error::WriteFailure {
            operation: "create",
            source: rusqlite::Error::InvalidQuery,
        };
        let display = format!("{err}");
        assert!(display.contains("failed to create reservation"));
        assert!(!err.is_unavailable());
        assert!(!err.is_busy());
    }

    #[test]
    fn test_read_failure_error() {
        let err = Error::ReadFailure {
            operation: "list reservations",
            source: rusqlite::Error::InvalidQuery,
        };
        assert!(format!("{err}").contains("failed to list reservations"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "date".to_string(),
            message: "must be in YYYY-MM-DD format".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("date"));
        assert!(display.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            id: ReservationId::new(9999),
        };
        assert_eq!(format!("{err}"), "reservation 9999 not found");
    }

    #[test]
    fn test_busy_write_failure() {
        let err = Error::WriteFailure {
            operation: "create",
            source: rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
                None,
            ),
        };
        assert!(err.is_busy());

        let wrapped = Error::ConnectionFailure {
            path: PathBuf::from("flights.db"),
            source: Box::new(err),
        };
        assert!(wrapped.is_busy());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
