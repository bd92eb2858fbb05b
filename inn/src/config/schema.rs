//! Configuration schema definitions.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reporting::DEFAULT_POPULARITY_WINDOW_DAYS;

/// Default lock wait, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; accessors supply
/// the defaults.
///
/// # Examples
///
/// ```
/// use inn::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str(
///     "reference_date: 2024-06-01\npopularity_window_days: 90\noutput_format: json\n",
/// ).unwrap();
/// assert_eq!(config.popularity_window(), 90);
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The day reports are computed relative to. Today when unset.
    pub reference_date: Option<NaiveDate>,

    /// Length of the room popularity window, in days.
    pub popularity_window_days: Option<u32>,

    /// Maximum time to wait for the database lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for listings.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured reference date, or `today`.
    #[must_use]
    pub fn as_of(&self, today: NaiveDate) -> NaiveDate {
        self.reference_date.unwrap_or(today)
    }

    /// The popularity window, defaulting to 180 days.
    #[must_use]
    pub fn popularity_window(&self) -> u32 {
        self.popularity_window_days
            .unwrap_or(DEFAULT_POPULARITY_WINDOW_DAYS)
    }

    /// The database busy timeout, defaulting to 5 seconds.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }
}

/// Output format for listings.
///
/// # Examples
///
/// ```
/// use inn::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated columns under uppercase headers.
    #[default]
    Table,
    /// JSON array.
    Json,
    /// Comma-separated values with a header row.
    Csv,
    /// Tab-separated values with a header row.
    Tsv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}
