//! Booking operations using the plan-execute pattern.
//!
//! Mutating operations are split into two phases:
//! 1. **Planning**: validates the request against the store and builds an
//!    [`OperationPlan`] without writing anything
//! 2. **Execution**: a [`PlanExecutor`] applies the plan to the store
//!
//! Dry-run mode stops after planning.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use inn::operations::{BookOptions, BookPlan, PlanExecutor, Selection};
//! use inn::{Database, DatabaseConfig, Guest, GuestCounts, StayDates};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/inn.db")).unwrap();
//! let stay = StayDates::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
//! ).unwrap();
//! let options = BookOptions::new(Guest::new("Ada", "Lovelace").unwrap(), stay, GuestCounts::new(2, 0));
//!
//! // Generate plan
//! let plan = BookPlan::new(options).build_plan(&db, &mut Selection::Index(1)).unwrap();
//!
//! // Execute plan
//! let mut executor = PlanExecutor::new(&mut db);
//! let result = executor.execute(&plan).unwrap();
//! ```

pub mod book;
pub mod cancel;
pub mod executor;
pub mod lookup;
pub mod plan;

pub use book::{book_reservation, BookOptions, BookPlan, BookingOutcome, BookingStage, RoomChooser, Selection};
pub use cancel::{cancel_reservation, CancelOptions, CancelOutcome, CancelPlan};
pub use executor::{ExecutionResult, PlanExecutor};
pub use lookup::{find_reservations, ReservationFilter};
pub use plan::{OperationPlan, PlanAction};
