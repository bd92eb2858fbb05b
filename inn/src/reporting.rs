//! Read-only room and ledger reports.
//!
//! Reports are computed in memory from the catalog and the ledger, relative
//! to an `as_of` day.

use std::cmp::Reverse;

use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::room::Room;

/// Default length of the popularity window, in days.
pub const DEFAULT_POPULARITY_WINDOW_DAYS: u32 = 180;

/// One row of the room listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomReport {
    /// The room.
    pub room: Room,
    /// Share of the window's nights that were occupied, 0.00 to 1.00.
    pub popularity: Decimal,
    /// Earliest check-in among stays that end after `as_of`, or `as_of`.
    pub next_check_in: NaiveDate,
    /// Nights of the most recent stay completed by `as_of`, or 0.
    pub last_stay_nights: i64,
}

/// Nights of `reservation` falling in `[start, end)`.
fn nights_within(reservation: &Reservation, start: NaiveDate, end: NaiveDate) -> i64 {
    let stay = reservation.stay();
    let from = stay.check_in().max(start);
    let to = stay.check_out().min(end);
    (to - from).num_days().max(0)
}

fn report_for(
    room: &Room,
    reservations: &[&Reservation],
    as_of: NaiveDate,
    window_start: NaiveDate,
    window_days: u32,
) -> RoomReport {

    let occupied: i64 = reservations
        .iter()
        .map(|r| nights_within(r, window_start, as_of))
        .sum();
    let popularity = if window_days == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(occupied) / Decimal::from(window_days))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    let next_check_in = reservations
        .iter()
        .filter(|r| r.stay().check_out() > as_of)
        .map(|r| r.stay().check_in())
        .min()
        .unwrap_or(as_of);

    let last_stay_nights = reservations
        .iter()
        .filter(|r| r.stay().check_out() <= as_of)
        .max_by_key(|r| (r.stay().check_out(), r.stay().check_in()))
        .map_or(0, |r| r.stay().nights());

    RoomReport {
        room: room.clone(),
        popularity,
        next_check_in,
        last_stay_nights,
    }
}

/// Builds the room listing.
///
/// Rows are ordered by popularity, highest first, then by room code.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the window reaches back before the
/// earliest representable date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use inn::reporting::room_report;
/// use inn::Room;
/// use rust_decimal::Decimal;
///
/// let room = Room::builder("A1", "Abscond or bolster").beds(1, "Queen")
///     .max_occupancy(2).base_rate(Decimal::new(100, 0)).build().unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// let rows = room_report(&[room], &[], as_of, 180).unwrap();
/// assert_eq!(rows[0].popularity, Decimal::ZERO);
/// assert_eq!(rows[0].next_check_in, as_of);
/// ```
pub fn room_report(
    rooms: &[Room],
    reservations: &[Reservation],
    as_of: NaiveDate,
    window_days: u32,
) -> Result<Vec<RoomReport>> {
    let window_start = as_of
        .checked_sub_days(Days::new(u64::from(window_days)))
        .ok_or_else(|| Error::Validation {
            field: "window_days".into(),
            message: format!("a {window_days}-day window before {as_of} is out of range"),
        })?;

    let mut rows: Vec<RoomReport> = rooms
        .iter()
        .map(|room| {
            let booked: Vec<&Reservation> = reservations
                .iter()
                .filter(|r| r.room() == room.code())
                .collect();
            report_for(room, &booked, as_of, window_start, window_days)
        })
        .collect();
    rows.sort_by(|a, b| {
        Reverse(a.popularity)
            .cmp(&Reverse(b.popularity))
            .then_with(|| a.room.code().cmp(b.room.code()))
    });
    Ok(rows)
}

/// Aggregate figures over a set of reservations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StayStatistics {
    /// Number of reservations.
    pub stays: usize,
    /// Total nights booked.
    pub nights: i64,
    /// Mean nights per reservation, 2 dp; zero when there are none.
    pub average_nights: Decimal,
    /// Sum of billed totals.
    pub revenue: Decimal,
}

/// Summarizes `reservations`.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the revenue total overflows.
pub fn stay_statistics(reservations: &[Reservation]) -> Result<StayStatistics> {
    let stays = reservations.len();
    let nights: i64 = reservations.iter().map(|r| r.stay().nights()).sum();
    let revenue = reservations
        .iter()
        .try_fold(Decimal::ZERO, |total, r| total.checked_add(r.rate()))
        .ok_or_else(|| Error::Validation {
            field: "rate".into(),
            message: "total revenue exceeds the representable range".into(),
        })?;
    let average_nights = if stays == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(nights) / Decimal::from(stays)).round_dp(2)
    };

    Ok(StayStatistics {
        stays,
        nights,
        average_nights,
        revenue,
    })
}
