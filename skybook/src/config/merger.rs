//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use skybook::config::{Config, ConfigMerger};
///
/// let low = Config { maximum_lock_wait_seconds: Some(5), ..Default::default() };
/// let high = Config { maximum_lock_wait_seconds: Some(30), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.maximum_lock_wait_seconds, Some(30));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced when the source sets it and left alone otherwise.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.database.is_some() {
            target.database.clone_from(&source.database);
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn test_merge_simple_fields() {
        let mut target = Config {
            database: Some(PathBuf::from("low.db")),
            maximum_lock_wait_seconds: Some(5),
            ..Default::default()
        };
        let source = Config {
            database: Some(PathBuf::from("high.db")),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);

        assert_eq!(target.database, Some(PathBuf::from("high.db")));
        assert_eq!(target.maximum_lock_wait_seconds, Some(5));
        assert_eq!(target.output_format, None);
    }

    #[test]
    fn test_merge_sources_in_order() {
        let sources = vec![
            ConfigSource {
                path: PathBuf::from("user.yaml"),
                precedence: 1,
                config: Config {
                    database: Some(PathBuf::from("user.db")),
                    output_format: Some(OutputFormat::Csv),
                    ..Default::default()
                },
            },
            ConfigSource {
                path: PathBuf::from("skybook.yaml"),
                precedence: 2,
                config: Config {
                    output_format: Some(OutputFormat::Json),
                    ..Default::default()
                },
            },
        ];

        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.database, Some(PathBuf::from("user.db")));
        assert_eq!(merged.output_format, Some(OutputFormat::Json));
        assert_eq!(merged.maximum_lock_wait_seconds, None);
    }

    #[test]
    fn test_merge_no_sources() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }
}
