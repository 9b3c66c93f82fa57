//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, store management, and timestamp formatting.

use crate::error::CliError;
use chrono::{DateTime, Utc};
use skybook::{Config, ConfigBuilder, ReservationStore};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    #[allow(dead_code)] // Consumed by the logger before commands run
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the store file location.
    pub database: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u64>,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let overrides = Config {
        database: global.database.clone(),
        maximum_lock_wait_seconds: global.busy_timeout,
        output_format: None,
    };

    ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the reservation store described by `config`.
///
/// The store file and its table are created if missing.
pub fn open_store(config: &Config) -> Result<ReservationStore, CliError> {
    let store = ReservationStore::open(config.store_config())?;
    log::debug!("Opened reservation store at {}", store.path().display());
    Ok(store)
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
