//! SQLite storage for the room catalog and the reservation ledger.
//!
//! [`Database`] implements [`crate::HotelStore`]. Every statement is
//! parameterized, and bookings are written inside an IMMEDIATE transaction
//! that re-checks the overlap rule before inserting.
//!
//! # Examples
//!
//! ```no_run
//! use inn::database::{Database, DatabaseConfig};
//! use inn::HotelStore;
//!
//! let config = DatabaseConfig::new("/tmp/inn.db");
//! let db = Database::open(config).unwrap();
//!
//! for room in db.list_rooms().unwrap() {
//!     println!("{room}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DATA_DIR_ENV,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
