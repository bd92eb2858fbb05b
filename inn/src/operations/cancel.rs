//! Cancellation planning and execution.

use crate::error::Result;
use crate::reservation::{Reservation, ReservationCode};
use crate::store::HotelStore;

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// Options for a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelOptions {
    /// The reservation to cancel.
    pub code: ReservationCode,

    /// Plan only; never ask and never write.
    pub dry_run: bool,
}

impl CancelOptions {
    /// Creates options for `code`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inn::operations::CancelOptions;
    /// use inn::ReservationCode;
    ///
    /// let options = CancelOptions::new(ReservationCode::new(10105));
    /// assert!(!options.dry_run);
    /// ```
    #[must_use]
    pub const fn new(code: ReservationCode) -> Self {
        Self {
            code,
            dry_run: false,
        }
    }

    /// Sets the dry-run flag.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Plans a cancellation.
pub struct CancelPlan {
    options: CancelOptions,
}

impl CancelPlan {
    /// Creates a planner for `options`.
    #[must_use]
    pub const fn new(options: CancelOptions) -> Self {
        Self { options }
    }

    /// Looks up the reservation and plans its deletion.
    ///
    /// The plan is empty, with a warning, when the code is unknown.
    ///
    /// # Errors
    ///
    /// Returns a store error if the lookup fails.
    pub fn build_plan<S: HotelStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        let code = self.options.code;
        let mut plan = OperationPlan::new(format!("Cancel reservation {code}"));

        if let Some(existing) = store.get_reservation(code)? {
            plan = plan.add_action(PlanAction::DeleteReservation(existing));
        } else {
            plan = plan.add_warning(format!("No reservation found with code {code}"));
        }

        Ok(plan)
    }
}

/// What a cancellation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The reservation was deleted.
    Cancelled(Reservation),
    /// The caller declined; nothing was deleted.
    Aborted(Reservation),
    /// No reservation has this code.
    NotFound(ReservationCode),
    /// Dry run: the plan that would have been executed.
    Planned(OperationPlan),
}

/// Cancels a reservation after `confirm` approves it.
///
/// `confirm` is called with the reservation about to be deleted and is not
/// called at all when the code is unknown or in dry-run mode.
///
/// # Errors
///
/// Returns a store error if the lookup or the delete fails.
///
/// # Examples
///
/// ```no_run
/// use inn::operations::{cancel_reservation, CancelOptions, CancelOutcome};
/// use inn::{Database, DatabaseConfig, ReservationCode};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/inn.db")).unwrap();
/// let options = CancelOptions::new(ReservationCode::new(10105));
///
/// match cancel_reservation(&mut db, options, |_| true).unwrap() {
///     CancelOutcome::Cancelled(r) => println!("cancelled {}", r.code()),
///     CancelOutcome::NotFound(code) => println!("no reservation {code}"),
///     _ => {}
/// }
/// ```
pub fn cancel_reservation<S, F>(
    store: &mut S,
    options: CancelOptions,
    confirm: F,
) -> Result<CancelOutcome>
where
    S: HotelStore + ?Sized,
    F: FnOnce(&Reservation) -> bool,
{
    let plan = CancelPlan::new(options).build_plan(&*store)?;

    let Some(existing) = plan.doomed_reservation().cloned() else {
        log::info!("cancel: reservation {} not found", options.code);
        return Ok(CancelOutcome::NotFound(options.code));
    };

    if options.dry_run {
        return Ok(CancelOutcome::Planned(plan));
    }

    if !confirm(&existing) {
        log::info!("cancel: reservation {} kept at caller's request", existing.code());
        return Ok(CancelOutcome::Aborted(existing));
    }

    PlanExecutor::new(store).execute(&plan)?;
    Ok(CancelOutcome::Cancelled(existing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::{Guest, GuestCounts, StayDates};
    use crate::store::MockHotelStore;
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    fn existing(code: i64) -> Reservation {
        let stay = StayDates::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        )
        .unwrap();
        Reservation::builder("A1", stay, Guest::new("Ada", "Lovelace").unwrap())
            .guests(GuestCounts::new(2, 0))
            .rate(Decimal::new(220, 0))
            .build(ReservationCode::new(code))
    }

    #[test]
    fn test_not_found_does_not_delete() {
        let mut store = MockHotelStore::new();
        store.expect_get_reservation().returning(|_| Ok(None));
        store.expect_delete_reservation().never();

        let mut asked = false;
        let outcome = cancel_reservation(&mut store, CancelOptions::new(ReservationCode::new(99)), |_| {
            asked = true;
            true
        })
        .unwrap();
        assert_eq!(outcome, CancelOutcome::NotFound(ReservationCode::new(99)));
        assert!(!asked);
    }

    #[test]
    fn test_declined_keeps_reservation() {
        let mut store = MockHotelStore::new();
        store
            .expect_get_reservation()
            .returning(|code| Ok(Some(existing(code.value()))));
        store.expect_delete_reservation().never();

        let outcome =
            cancel_reservation(&mut store, CancelOptions::new(ReservationCode::new(7)), |_| false)
                .unwrap();
        assert!(matches!(outcome, CancelOutcome::Aborted(r) if r.code().value() == 7));
    }

    #[test]
    fn test_confirmed_deletes() {
        let mut store = MockHotelStore::new();
        store
            .expect_get_reservation()
            .returning(|code| Ok(Some(existing(code.value()))));
        store
            .expect_delete_reservation()
            .with(eq(ReservationCode::new(7)))
            .times(1)
            .returning(|_| Ok(true));

        let outcome = cancel_reservation(&mut store, CancelOptions::new(ReservationCode::new(7)), |r| {
            r.guest().last_name() == "Lovelace"
        })
        .unwrap();
        assert!(matches!(outcome, CancelOutcome::Cancelled(_)));
    }

    #[test]
    fn test_dry_run_never_asks() {
        let mut store = MockHotelStore::new();
        store
            .expect_get_reservation()
            .returning(|code| Ok(Some(existing(code.value()))));
        store.expect_delete_reservation().never();

        let options = CancelOptions::new(ReservationCode::new(7)).with_dry_run(true);
        let outcome = cancel_reservation(&mut store, options, |_| panic!("asked during dry run"))
            .unwrap();
        let CancelOutcome::Planned(plan) = outcome else {
            panic!("expected a plan");
        };
        assert_eq!(plan.len(), 1);
    }
}
