//! Store lifecycle and connection management.
//!
//! This module provides the reservation store type: construction from a
//! [`StoreConfig`], lazy opening with schema creation, and shutdown.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::{StoreConfig, MAX_BUSY_TIMEOUT};
use super::schema::{CREATE_RESERVATIONS_TABLE, RESERVATIONS_TABLE_EXISTS};

/// Persistent store of flight reservations backed by a single `SQLite` file.
///
/// The store holds at most one connection. Every operation locks it for its
/// whole duration, so a store shared between threads (for example behind an
/// `Arc`) serializes its callers instead of interleaving statements.
///
/// A store that failed to initialize, or that has been shut down, stays
/// usable as a value: each operation returns [`Error::StorageUnavailable`].
///
/// # Examples
///
/// ```no_run
/// use skybook::store::{ReservationStore, StoreConfig};
///
/// let store = ReservationStore::new(StoreConfig::new("/tmp/flights.db"));
/// store.initialize().unwrap();
/// assert!(store.is_open());
/// store.shutdown().unwrap();
/// ```
#[derive(Debug)]
pub struct ReservationStore {
    conn: Mutex<Option<Connection>>,
    config: StoreConfig,
}

impl ReservationStore {
    /// Creates a closed store for the given configuration.
    ///
    /// Nothing touches the disk until [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            conn: Mutex::new(None),
            config,
        }
    }

    /// Creates a store and initializes it immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConnectionFailure`] if the store cannot be opened.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let store = Self::new(config);
        store.initialize()?;
        Ok(store)
    }

    /// Opens the backing file and creates the reservations table if absent.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the file with flags matching the configuration
    /// - Configure the busy timeout
    /// - Create the `reservations` table, leaving existing rows untouched
    ///
    /// Calling it on a store that is already open only re-checks the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConnectionFailure`] if the file cannot be opened or
    /// the schema statement fails. The failure is logged and the store is
    /// left closed.
    pub fn initialize(&self) -> Result<()> {
        let mut guard = self.lock();

        if let Some(conn) = guard.as_ref() {
            return self
                .ensure_schema(conn)
                .map_err(|e| self.connection_failure(e));
        }

        let conn = self.connect().map_err(|e| self.connection_failure(e))?;
        log::info!("Reservation store opened at {}", self.config.path.display());
        *guard = Some(conn);

        Ok(())
    }

    /// Releases the backing connection.
    ///
    /// Safe to call repeatedly; a closed store is left as it is.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` reports a failure while closing. The
    /// connection is released either way.
    pub fn shutdown(&self) -> Result<()> {
        let Some(conn) = self.lock().take() else {
            log::debug!("Reservation store already closed");
            return Ok(());
        };

        if let Err((_conn, e)) = conn.close() {
            log::warn!("Error while closing reservation store: {e}");
            return Err(e.into());
        }

        log::info!("Reservation store closed");
        Ok(())
    }

    /// Returns whether the store currently holds an open connection.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Returns the configuration this store was created with.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Runs `f` against the open connection.
    ///
    /// Returns [`Error::StorageUnavailable`] when the store is closed.
    pub(super) fn with_connection<T>(
        &self,
        operation: &str,
        f: impl FnOnce(&mut Connection) -> Result<T>,
    ) -> Result<T> {
        let mut guard = self.lock();
        match guard.as_mut() {
            Some(conn) => f(conn),
            None => {
                log::error!("Cannot {operation}: reservation store is not open");
                Err(Error::StorageUnavailable)
            }
        }
    }

    /// Locks the connection slot, recovering the guard if a caller panicked.
    fn lock(&self) -> MutexGuard<'_, Option<Connection>> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn connect(&self) -> Result<Connection> {
        let config = &self.config;

        if config.busy_timeout > MAX_BUSY_TIMEOUT {
            return Err(Error::Validation {
                field: "busy_timeout".into(),
                message: format!(
                    "{}s exceeds the maximum of {}s",
                    config.busy_timeout.as_secs(),
                    MAX_BUSY_TIMEOUT.as_secs()
                ),
            });
        }

        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;
        conn.busy_timeout(config.busy_timeout)?;

        self.ensure_schema(&conn)?;

        Ok(conn)
    }

    fn ensure_schema(&self, conn: &Connection) -> Result<()> {
        if self.config.read_only {
            let tables: i64 = conn.query_row(RESERVATIONS_TABLE_EXISTS, [], |row| row.get(0))?;
            if tables == 0 {
                return Err(Error::Validation {
                    field: "reservations".into(),
                    message: "table is missing and the store is read-only".into(),
                });
            }
            return Ok(());
        }

        conn.execute(CREATE_RESERVATIONS_TABLE, [])?;
        Ok(())
    }

    fn connection_failure(&self, source: Error) -> Error {
        log::error!(
            "Error opening reservation store {}: {source}",
            self.config.path.display()
        );
        Error::ConnectionFailure {
            path: self.config.path.clone(),
            source: Box::new(source),
        }
    }
}

impl Drop for ReservationStore {
    fn drop(&mut self) {
        // Errors on close were already logged by `shutdown`.
        let _ = self.shutdown();
    }
}
