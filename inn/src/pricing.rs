//! Stay pricing.
//!
//! A stay is charged once per night. Nights that start on a Saturday or
//! Sunday cost [`WEEKEND_MULTIPLIER`] times the base rate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{Error, Result};
use crate::reservation::{is_weekend, StayDates};

/// Multiplier applied to the base rate for weekend nights.
pub const WEEKEND_MULTIPLIER: Decimal = dec!(1.1);

/// Decimal places of a billed amount.
pub const PRICE_SCALE: u32 = 2;

fn too_large(base_rate: Decimal) -> Error {
    Error::Validation {
        field: "base_rate".into(),
        message: format!("charges at a base rate of {base_rate} exceed the representable range"),
    }
}

/// Returns the charge for the night starting on `date`.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the weekend surcharge overflows.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use inn::pricing::nightly_rate;
/// use rust_decimal::Decimal;
///
/// let saturday = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// assert_eq!(nightly_rate(saturday, Decimal::new(100, 0)).unwrap(), Decimal::new(110, 0));
/// assert_eq!(nightly_rate(monday, Decimal::new(100, 0)).unwrap(), Decimal::new(100, 0));
/// ```
pub fn nightly_rate(date: NaiveDate, base_rate: Decimal) -> Result<Decimal> {
    if is_weekend(date) {
        base_rate
            .checked_mul(WEEKEND_MULTIPLIER)
            .ok_or_else(|| too_large(base_rate))
    } else {
        Ok(base_rate)
    }
}

/// Returns `(night, charge)` for every night of the stay, unrounded.
///
/// # Errors
///
/// Returns [`Error::Validation`] if a nightly charge overflows.
pub fn nightly_breakdown(stay: &StayDates, base_rate: Decimal) -> Result<Vec<(NaiveDate, Decimal)>> {
    stay.each_night()
        .map(|night| Ok((night, nightly_rate(night, base_rate)?)))
        .collect()
}

/// Prices a validated stay, rounded to cents.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the total overflows.
pub fn stay_cost(stay: &StayDates, base_rate: Decimal) -> Result<Decimal> {
    let mut total = Decimal::ZERO;
    for night in stay.each_night() {
        total = total
            .checked_add(nightly_rate(night, base_rate)?)
            .ok_or_else(|| too_large(base_rate))?;
    }
    Ok(total.round_dp(PRICE_SCALE))
}

/// Computes the total cost of staying from `check_in` to `check_out`.
///
/// The check-out day is not charged. The total is rounded to two decimal
/// places, midpoints to even.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] unless `check_out` is strictly after
/// `check_in`, or [`Error::Validation`] if the total overflows.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use inn::compute_stay_cost;
/// use rust_decimal::Decimal;
///
/// // Saturday and Sunday nights
/// let cost = compute_stay_cost(
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     Decimal::new(100, 0),
/// ).unwrap();
/// assert_eq!(cost, Decimal::new(220, 0));
/// ```
pub fn compute_stay_cost(
    check_in: NaiveDate,
    check_out: NaiveDate,
    base_rate: Decimal,
) -> Result<Decimal> {
    let stay = StayDates::new(check_in, check_out)?;
    stay_cost(&stay, base_rate)
}
