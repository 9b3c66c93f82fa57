//! Configuration file discovery and loading.
//!
//! This module finds the user and project configuration files and parses
//! whichever of them exist.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;

/// Name of the per-user configuration directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".skybook";

/// File name of the user configuration inside [`USER_CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// File name of the project configuration in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "skybook.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the files that exist.
///
/// # Examples
///
/// ```no_run
/// use skybook::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Looks for:
    /// 1. User config at `~/.skybook/config.yaml` (precedence 1)
    /// 2. Project `skybook.yaml` in `working_dir` (precedence 2)
    ///
    /// `user_dir` replaces `~/.skybook` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        let user_path = match user_dir {
            Some(dir) => Some(dir.join(USER_CONFIG_FILE)),
            None => Self::user_config_path(),
        };
        if let Some(path) = user_path {
            if let Some(source) = Self::load_source(path, 1)? {
                sources.push(source);
            }
        }

        if let Some(source) = Self::load_source(working_dir.join(PROJECT_CONFIG_FILE), 2)? {
            sources.push(source);
        }

        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    fn load_source(path: PathBuf, precedence: u8) -> Result<Option<ConfigSource>> {
        if !path.exists() {
            return Ok(None);
        }

        log::debug!("Loading configuration from {}", path.display());
        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;

        // An empty file means "nothing configured" rather than a YAML null
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Path of the user configuration file, if the home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }
}
