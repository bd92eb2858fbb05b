//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;

use inn::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Timeout waiting for database lock.
    Timeout,

    /// The ledger does not exist yet.
    NoDataDirectory(String),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g. unknown reservation code) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (capacity, selection, not found, conflict)
    /// - 2: Timeout waiting for database lock
    /// - 3: No data directory found
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) if lib_err.is_semantic() => 1,
            CliError::Library(_) => 6,
            CliError::Timeout => 2,
            CliError::NoDataDirectory(_) => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Timeout => write!(f, "Timeout waiting for database lock"),
            CliError::NoDataDirectory(path) => write!(
                f,
                "No ledger in {path} (run `inn import-rooms` first or pass --data-dir)"
            ),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Database(rusqlite::Error::SqliteFailure(failure, _))
                if matches!(
                    failure.code,
                    rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
                ) =>
            {
                CliError::Timeout
            }
            LibError::DataDirectoryNotFound { path } => {
                CliError::NoDataDirectory(path.display().to_string())
            }
            LibError::Validation { field, message } => {
                CliError::InvalidArguments(format!("{field}: {message}"))
            }
            LibError::Io(e) => CliError::Io(e),
            other => CliError::Library(other),
        }
    }
}

impl From<inn::ValidationError> for CliError {
    fn from(e: inn::ValidationError) -> Self {
        CliError::from(LibError::from(e))
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Io(std::io::Error::other(e))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_semantic_library_errors_exit_one() {
        let err = CliError::from(LibError::CapacityExceeded {
            requested: 9,
            max: 4,
        });
        assert_eq!(err.exit_code(), 1);

        let err = CliError::from(LibError::ReservationConflict {
            details: "A1".into(),
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_ledger_exits_three() {
        let err = CliError::from(LibError::DataDirectoryNotFound {
            path: PathBuf::from("/nowhere"),
        });
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("/nowhere"));
    }

    #[test]
    fn test_validation_is_invalid_arguments() {
        let err = CliError::from(inn::Guest::new(" ", "Lovelace").unwrap_err());
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_busy_database_is_timeout() {
        let failure = rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY);
        let err = CliError::from(LibError::Database(rusqlite::Error::SqliteFailure(failure, None)));
        assert_eq!(err.exit_code(), 2);
    }
}
