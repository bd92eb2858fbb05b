//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use inn::config::{Config, ConfigMerger};
///
/// let low = Config { popularity_window_days: Some(30), ..Default::default() };
/// let high = Config { popularity_window_days: Some(90), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.popularity_window_days, Some(90));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merges sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Overwrites each field of `target` that `source` sets.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.reference_date.is_some() {
            target.reference_date = source.reference_date;
        }

        if source.popularity_window_days.is_some() {
            target.popularity_window_days = source.popularity_window_days;
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
