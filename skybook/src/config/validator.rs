//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::store::MAX_BUSY_TIMEOUT;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use skybook::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the database path is empty, or if the
    /// lock wait is zero or longer than `SQLite` allows.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref database) = config.database {
            if database.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "database".into(),
                    message: "Database path cannot be empty".into(),
                });
            }

            if database.to_string_lossy().contains('\0') {
                return Err(Error::Validation {
                    field: "database".into(),
                    message: "Database path cannot contain null bytes".into(),
                });
            }
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }

            if timeout > MAX_BUSY_TIMEOUT.as_secs() {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: format!(
                        "Timeout must be at most {} seconds",
                        MAX_BUSY_TIMEOUT.as_secs()
                    ),
                });
            }
        }

        Ok(())
    }
}
