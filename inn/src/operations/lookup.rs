//! Reservation lookup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::reservation::{ReservationCode, ReservationDetail};
use crate::store::HotelStore;

/// Optional lookup criteria, combined with AND.
///
/// Text criteria match exactly and case-sensitively. Date criteria match a
/// reservation's exact check-in or check-out day. Absent criteria, and text
/// criteria that are empty after trimming, are ignored.
///
/// # Examples
///
/// ```
/// use inn::operations::ReservationFilter;
///
/// let filter = ReservationFilter::default()
///     .with_last_name("Lovelace")
///     .with_room("  ");
/// let normalized = filter.normalized();
/// assert_eq!(normalized.last_name.as_deref(), Some("Lovelace"));
/// assert!(normalized.room.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationFilter {
    /// Guest first name.
    pub first_name: Option<String>,
    /// Guest last name.
    pub last_name: Option<String>,
    /// Reservation code.
    pub code: Option<ReservationCode>,
    /// Room code.
    pub room: Option<String>,
    /// Exact check-in day.
    pub check_in: Option<NaiveDate>,
    /// Exact check-out day.
    pub check_out: Option<NaiveDate>,
}

impl ReservationFilter {
    /// Sets the first name criterion.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the last name criterion.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the reservation code criterion.
    #[must_use]
    pub const fn with_code(mut self, code: ReservationCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets the room code criterion.
    #[must_use]
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Sets the check-in day criterion.
    #[must_use]
    pub const fn with_check_in(mut self, check_in: NaiveDate) -> Self {
        self.check_in = Some(check_in);
        self
    }

    /// Sets the check-out day criterion.
    #[must_use]
    pub const fn with_check_out(mut self, check_out: NaiveDate) -> Self {
        self.check_out = Some(check_out);
        self
    }

    /// Trims text criteria and drops the ones left empty.
    #[must_use]
    pub fn normalized(&self) -> Self {
        fn clean(value: Option<&String>) -> Option<String> {
            value
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        Self {
            first_name: clean(self.first_name.as_ref()),
            last_name: clean(self.last_name.as_ref()),
            code: self.code,
            room: clean(self.room.as_ref()),
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }

    /// Returns true if no criterion is set after normalization.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.normalized() == Self::default()
    }
}

/// Finds reservations matching `filter`, joined with room names and ordered
/// by check-in then code.
///
/// # Errors
///
/// Returns a store error if the search fails.
pub fn find_reservations<S: HotelStore + ?Sized>(
    store: &S,
    filter: &ReservationFilter,
) -> Result<Vec<ReservationDetail>> {
    let filter = filter.normalized();
    if filter.is_unrestricted() {
        log::debug!("lookup without criteria returns the whole ledger");
    }
    let found = store.search_reservations(&filter)?;
    log::debug!("lookup matched {} reservation(s)", found.len());
    Ok(found)
}
