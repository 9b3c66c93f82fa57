//! Configuration schema definitions.
//!
//! This module defines the configuration structure for skybook: where the
//! store lives, how long to wait on a locked store, and how to print results.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::store::{StoreConfig, DEFAULT_DATABASE_FILE};

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be layered on top of each other.
///
/// # Examples
///
/// ```
/// use skybook::config::{Config, OutputFormat};
/// use std::path::PathBuf;
///
/// let config = Config {
///     database: Some(PathBuf::from("/var/lib/skybook/flights.db")),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the reservation store file.
    pub database: Option<PathBuf>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for `list` and `show`.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the configured store path, or `flights.db` if none is set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE))
    }

    /// Returns the configured output format, or the table format if none is set.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Builds the store configuration described by this config.
    ///
    /// # Examples
    ///
    /// ```
    /// use skybook::config::Config;
    /// use std::time::Duration;
    ///
    /// let config = Config {
    ///     maximum_lock_wait_seconds: Some(30),
    ///     ..Default::default()
    /// };
    /// let store_config = config.store_config();
    /// assert_eq!(store_config.path.to_str(), Some("flights.db"));
    /// assert_eq!(store_config.busy_timeout, Duration::from_secs(30));
    /// ```
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        let store_config = StoreConfig::new(self.database_path());
        match self.maximum_lock_wait_seconds {
            Some(seconds) => store_config.with_busy_timeout(Duration::from_secs(seconds)),
            None => store_config,
        }
    }
}

/// Output format for commands that print reservations.
///
/// # Examples
///
/// ```
/// use skybook::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(format!(
                "invalid output format: '{s}' (expected table/json/csv/tsv)"
            )),
        }
    }
}
