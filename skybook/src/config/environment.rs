//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SKYBOOK_*` environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::store::DATABASE_ENV_VAR;

/// Environment variable overriding the lock wait, in seconds.
pub const BUSY_TIMEOUT_ENV_VAR: &str = "SKYBOOK_BUSY_TIMEOUT";

/// Environment variable overriding the output format.
pub const OUTPUT_FORMAT_ENV_VAR: &str = "SKYBOOK_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use skybook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value (e.g., a
    /// non-numeric timeout or an unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(path) = Self::var(DATABASE_ENV_VAR) {
            config.database = Some(PathBuf::from(path));
        }

        if let Some(seconds) = Self::var(BUSY_TIMEOUT_ENV_VAR) {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: BUSY_TIMEOUT_ENV_VAR.into(),
                    message: format!("Must be a positive integer, got '{seconds}'"),
                })?);
        }

        if let Some(format) = Self::var(OUTPUT_FORMAT_ENV_VAR) {
            let format: OutputFormat = format.parse().map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV_VAR.into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 3] = [DATABASE_ENV_VAR, BUSY_TIMEOUT_ENV_VAR, OUTPUT_FORMAT_ENV_VAR];

    // Runs `f` with the given variables set, restoring the previous values after
    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let saved: Vec<_> = VARS.iter().map(|name| (*name, env::var(name).ok())).collect();
        for name in VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }

        f();

        for (name, value) in saved {
            match value {
                Some(v) => env::set_var(name, v),
                None => env::remove_var(name),
            }
        }
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config_untouched() {
        with_env(&[], || {
            let mut config = Config {
                maximum_lock_wait_seconds: Some(9),
                ..Default::default()
            };
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config.maximum_lock_wait_seconds, Some(9));
            assert_eq!(config.database, None);
        });
    }

    #[test]
    #[serial]
    fn test_all_overrides() {
        with_env(
            &[
                (DATABASE_ENV_VAR, "/tmp/env.db"),
                (BUSY_TIMEOUT_ENV_VAR, "15"),
                (OUTPUT_FORMAT_ENV_VAR, "json"),
            ],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.database, Some(PathBuf::from("/tmp/env.db")));
                assert_eq!(config.maximum_lock_wait_seconds, Some(15));
                assert_eq!(config.output_format, Some(OutputFormat::Json));
            },
        );
    }

    #[test]
    #[serial]
    fn test_blank_values_ignored() {
        with_env(&[(DATABASE_ENV_VAR, "  "), (OUTPUT_FORMAT_ENV_VAR, "")], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn test_invalid_timeout() {
        with_env(&[(BUSY_TIMEOUT_ENV_VAR, "soon")], || {
            let mut config = Config::default();
            let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
            assert!(
                matches!(err, Error::Validation { ref field, .. } if field == BUSY_TIMEOUT_ENV_VAR)
            );
        });
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        with_env(&[(OUTPUT_FORMAT_ENV_VAR, "yaml")], || {
            let mut config = Config::default();
            assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
        });
    }
}
