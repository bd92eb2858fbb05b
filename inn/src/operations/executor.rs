//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the store.

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationCode};
use crate::store::HotelStore;

use super::plan::{OperationPlan, PlanAction};

/// What executing a plan changed.
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    /// The reservation that was created, with its assigned code.
    pub created: Option<Reservation>,

    /// Codes of reservations that were deleted.
    pub deleted: Vec<ReservationCode>,
}

/// Applies operation plans to a store.
///
/// Dry runs never reach the executor: operations return their plan
/// instead of executing it.
///
/// # Examples
///
/// ```no_run
/// use inn::operations::{OperationPlan, PlanExecutor};
/// use inn::{Database, DatabaseConfig};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/inn.db")).unwrap();
/// let plan = OperationPlan::new("Nothing to do");
///
/// let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
/// assert!(result.created.is_none());
/// ```
pub struct PlanExecutor<'a, S: HotelStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: HotelStore + ?Sized> PlanExecutor<'a, S> {
    /// Creates a new plan executor.
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Executes every action of `plan` in order.
    ///
    /// # Errors
    ///
    /// Returns the first store error. A delete of a reservation that has
    /// disappeared since planning fails with [`Error::NotFound`].
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::default();
        for action in &plan.actions {
            log::debug!("executing: {}", action.description());
            match action {
                PlanAction::CreateReservation(new) => {
                    let reservation = self.store.insert_reservation(new)?;
                    log::info!(
                        "reservation {} created for room {}",
                        reservation.code(),
                        reservation.room()
                    );
                    result.created = Some(reservation);
                }
                PlanAction::DeleteReservation(existing) => {
                    if !self.store.delete_reservation(existing.code())? {
                        return Err(Error::NotFound {
                            resource: format!("reservation {}", existing.code()),
                        });
                    }
                    log::info!("reservation {} deleted", existing.code());
                    result.deleted.push(existing.code());
                }
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::{Guest, GuestCounts, StayDates};
    use crate::store::MockHotelStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn sample_plan() -> OperationPlan {
        let stay = StayDates::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        )
        .unwrap();
        let new = Reservation::builder("HBB", stay, Guest::new("Ada", "Lovelace").unwrap())
            .guests(GuestCounts::new(2, 0))
            .rate(Decimal::new(220, 0))
            .build_new();
        OperationPlan::new("Book").add_action(PlanAction::CreateReservation(new))
    }

    #[test]
    fn test_empty_plan_touches_nothing() {
        let mut store = MockHotelStore::new();
        store.expect_insert_reservation().never();
        store.expect_delete_reservation().never();

        let result = PlanExecutor::new(&mut store)
            .execute(&OperationPlan::new("Nothing"))
            .unwrap();
        assert!(result.created.is_none());
        assert!(result.deleted.is_empty());
    }

    #[test]
    fn test_create_returns_assigned_code() {
        let mut store = MockHotelStore::new();
        store
            .expect_insert_reservation()
            .times(1)
            .returning(|new| Ok(new.clone().with_code(ReservationCode::new(10001))));

        let plan = sample_plan();
        let mut executor = PlanExecutor::new(&mut store);
        let result = executor.execute(&plan).unwrap();
        assert_eq!(result.created.unwrap().code().value(), 10001);
    }

    #[test]
    fn test_delete_of_vanished_reservation_is_not_found() {
        let mut store = MockHotelStore::new();
        store.expect_delete_reservation().returning(|_| Ok(false));

        let existing = sample_plan()
            .pending_reservation()
            .unwrap()
            .clone()
            .with_code(ReservationCode::new(5));
        let plan = OperationPlan::new("Cancel").add_action(PlanAction::DeleteReservation(existing));

        let mut executor = PlanExecutor::new(&mut store);
        let err = executor.execute(&plan).unwrap_err();
        assert!(err.is_not_found());
    }
}
