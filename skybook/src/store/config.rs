//! Store configuration and connection parameters.
//!
//! This module provides the configuration type injected into a
//! [`ReservationStore`](super::ReservationStore).

use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the reservation store when no path is configured.
pub const DEFAULT_DATABASE_FILE: &str = "flights.db";

/// Environment variable that overrides the store path.
pub const DATABASE_ENV_VAR: &str = "SKYBOOK_DATABASE";

/// Longest busy timeout `SQLite` accepts (`i32::MAX` milliseconds).
pub const MAX_BUSY_TIMEOUT: Duration = Duration::from_millis(i32::MAX as u64);

/// Configuration for a reservation store.
///
/// # Examples
///
/// ```
/// use skybook::store::StoreConfig;
/// use std::time::Duration;
///
/// let config = StoreConfig::new("/tmp/flights.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the store file.
    pub path: PathBuf,
    /// How long to wait on a locked store file before failing.
    pub busy_timeout: Duration,
    /// Whether to create the store file (and its parent directory) if missing.
    pub auto_create: bool,
    /// Whether to open the store in read-only mode.
    pub read_only: bool,
}

impl StoreConfig {
    /// Creates a new store configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Disables creation of a missing store file.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Configures the store to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use skybook::store::StoreConfig;
    ///
    /// let config = StoreConfig::new("/tmp/flights.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = StoreConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_config_default_path_is_relative() {
        let config = StoreConfig::default();
        assert_eq!(config.path, PathBuf::from("flights.db"));
        assert!(config.path.is_relative());
    }

    #[test]
    fn test_config_with_busy_timeout() {
        let config =
            StoreConfig::new("/tmp/test.db").with_busy_timeout(Duration::from_millis(10000));
        assert_eq!(config.busy_timeout, Duration::from_millis(10000));
    }

    #[test]
    fn test_max_busy_timeout_in_seconds() {
        assert_eq!(MAX_BUSY_TIMEOUT.as_secs(), 2_147_483);
    }

    #[test]
    fn test_config_read_only() {
        let config = StoreConfig::new("/tmp/test.db").read_only();
        assert!(config.read_only);
        assert!(!config.auto_create);
    }

    #[test]
    fn test_config_without_auto_create() {
        let config = StoreConfig::new("/tmp/test.db").without_auto_create();
        assert!(!config.auto_create);
        assert!(!config.read_only);
    }
}
