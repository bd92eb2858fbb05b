//! `INN_*` environment variable overrides.

use std::env;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// | Variable | Field |
/// |---|---|
/// | `INN_REFERENCE_DATE` | `reference_date` (`YYYY-MM-DD`) |
/// | `INN_POPULARITY_WINDOW_DAYS` | `popularity_window_days` |
/// | `INN_MAXIMUM_LOCK_WAIT_SECONDS` | `maximum_lock_wait_seconds` |
/// | `INN_OUTPUT_FORMAT` | `output_format` |
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Applies every set `INN_*` variable to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable if a value cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(date) = Self::parse_var::<NaiveDate>("INN_REFERENCE_DATE", "Must be a date (YYYY-MM-DD)")? {
            config.reference_date = Some(date);
        }

        if let Some(days) = Self::parse_var("INN_POPULARITY_WINDOW_DAYS", "Must be a positive integer")? {
            config.popularity_window_days = Some(days);
        }

        if let Some(seconds) =
            Self::parse_var("INN_MAXIMUM_LOCK_WAIT_SECONDS", "Must be a positive integer")?
        {
            config.maximum_lock_wait_seconds = Some(seconds);
        }

        if let Some(format) =
            Self::parse_var::<OutputFormat>("INN_OUTPUT_FORMAT", "Must be table, json, csv, or tsv")?
        {
            config.output_format = Some(format);
        }

        Ok(())
    }

    fn parse_var<T: FromStr>(name: &str, expectation: &str) -> Result<Option<T>> {
        match env::var(name) {
            Ok(value) if !value.trim().is_empty() => {
                value.trim().parse().map(Some).map_err(|_| Error::Validation {
                    field: name.into(),
                    message: format!("{expectation}, got '{value}'"),
                })
            }
            _ => Ok(None),
        }
    }
}
