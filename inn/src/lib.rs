#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # inn
//!
//! A library for booking rooms at a single property.
//!
//! It keeps a room catalog and a reservation ledger, prices stays with a
//! weekend surcharge, finds free rooms for a date range (falling back to
//! similar-sized alternates), and books, cancels, and looks up reservations.
//!
//! ## Core Types
//!
//! - [`Room`] and [`Filter`]: the catalog and wildcard filters over it
//! - [`Reservation`], [`StayDates`], [`Guest`], [`GuestCounts`]: the ledger
//! - [`AvailabilityQuery`] and [`Availability`]: free-room search
//! - [`HotelStore`] and [`Database`]: storage
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use inn::compute_stay_cost;
//! use rust_decimal::Decimal;
//!
//! // Saturday and Sunday nights carry a 10% surcharge
//! let cost = compute_stay_cost(
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
//!     Decimal::new(100, 0),
//! ).unwrap();
//! assert_eq!(cost, Decimal::new(220, 0));
//! ```

pub mod availability;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod pricing;
pub mod reporting;
pub mod reservation;
pub mod room;
pub mod store;

// Re-export key types at crate root for convenience
pub use availability::{find_available_rooms, Availability, AvailabilityQuery};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    book_reservation, cancel_reservation, find_reservations, BookOptions, BookingOutcome,
    CancelOptions, CancelOutcome, OperationPlan, PlanAction, PlanExecutor, ReservationFilter,
    RoomChooser, Selection,
};
pub use pricing::compute_stay_cost;
pub use reporting::{room_report, stay_statistics, RoomReport, StayStatistics};
pub use reservation::{
    Guest, GuestCounts, NewReservation, Reservation, ReservationCode, ReservationDetail, StayDates,
};
pub use room::{read_catalog_csv, Filter, Room, ValidationError};
pub use store::HotelStore;
