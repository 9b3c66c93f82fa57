//! Configuration system for skybook.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `skybook.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SKYBOOK_*`)
//! 3. Project config (`skybook.yaml` in the working directory)
//! 4. User config (`~/.skybook/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use skybook::config::ConfigBuilder;
//! use skybook::ReservationStore;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let store = ReservationStore::open(config.store_config()).unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, BUSY_TIMEOUT_ENV_VAR, OUTPUT_FORMAT_ENV_VAR};
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
