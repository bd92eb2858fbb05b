//! Error types for the inn library.
//!
//! This module provides the error hierarchy for every operation in the
//! inn library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for operations that may fail with an inn error.
///
/// # Examples
///
/// ```
/// use inn::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the inn library.
///
/// This enum encompasses all error conditions that can occur while
/// listing rooms, booking, cancelling, or looking up reservations.
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred (store unreachable, query failed, ...).
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV catalog file could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The party is larger than any room in the catalog can hold.
    #[error("capacity exceeded: {requested} guest(s) requested, largest room holds {max}")]
    CapacityExceeded {
        /// Total guests requested.
        requested: u32,
        /// Largest `max_occupancy` in the catalog.
        max: u32,
    },

    /// A room choice outside the presented candidate list.
    #[error("selection {index} out of range: choose between 1 and {available}")]
    SelectionOutOfRange {
        /// The 1-based index that was chosen.
        index: usize,
        /// How many candidates were presented.
        available: usize,
    },

    /// Check-out is not strictly after check-in.
    #[error("invalid date range: check-out {check_out} must be after check-in {check_in}")]
    InvalidRange {
        /// The requested check-in date.
        check_in: NaiveDate,
        /// The requested check-out date.
        check_out: NaiveDate,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// No room in the catalog could be offered, not even as an alternate.
    #[error("no rooms available for {guests} guest(s)")]
    NoRoomsAvailable {
        /// Total guests requested.
        guests: u32,
    },

    /// The stay collides with a reservation persisted concurrently.
    #[error("reservation conflict: {details}")]
    ReservationConflict {
        /// Details about the conflict.
        details: String,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

impl From<crate::room::ValidationError> for Error {
    fn from(err: crate::room::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error reports a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use inn::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation 10105".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error is a booking-rule failure rather than an
    /// infrastructure failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use inn::Error;
    ///
    /// let err = Error::CapacityExceeded { requested: 9, max: 4 };
    /// assert!(err.is_semantic());
    /// ```
    #[must_use]
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. }
                | Self::SelectionOutOfRange { .. }
                | Self::InvalidRange { .. }
                | Self::NotFound { .. }
                | Self::NoRoomsAvailable { .. }
                | Self::ReservationConflict { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "first_name".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("first_name"));
        assert!(display.contains("must be non-empty"));
    }

    #[test]
    fn test_capacity_exceeded_error() {
        let err = Error::CapacityExceeded {
            requested: 7,
            max: 4,
        };
        let display = format!("{err}");
        assert!(display.contains("capacity exceeded"));
        assert!(display.contains("7 guest(s)"));
        assert!(display.contains("holds 4"));
    }

    #[test]
    fn test_selection_out_of_range_error() {
        let err = Error::SelectionOutOfRange {
            index: 6,
            available: 5,
        };
        let display = format!("{err}");
        assert!(display.contains("selection 6"));
        assert!(display.contains("between 1 and 5"));
    }

    #[test]
    fn test_invalid_range_error() {
        let err = Error::InvalidRange {
            check_in: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        let display = format!("{err}");
        assert!(display.contains("2024-06-01"));
        assert!(display.contains("2024-06-03"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            resource: "reservation 10105".to_string(),
        };
        assert!(format!("{err}").contains("not found: reservation 10105"));
        assert!(err.is_not_found());
        assert!(err.is_semantic());
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
        assert!(!err.is_semantic());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: Error = crate::room::ValidationError {
            field: "code".into(),
            message: "room code must be non-empty".into(),
        }
        .into();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "code"));
    }
}
