//! Shared fixtures for database unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::database::Database;
use crate::reservation::{Guest, GuestCounts, NewReservation, Reservation, StayDates};
use crate::room::Room;

/// Creates an empty in-memory database.
///
/// # Panics
///
/// Panics if the schema cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    Database::open_in_memory().unwrap()
}

/// A day in June 2024.
///
/// # Panics
///
/// Panics on an invalid day.
#[must_use]
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

/// Four rooms: two Queen, one King, one two-bed Queen suite.
///
/// # Panics
///
/// Panics if a fixture room is invalid.
#[must_use]
pub fn sample_catalog() -> Vec<Room> {
    [
        ("AOB", "Abscond or bolster", 2, "Queen", 4, Decimal::new(175, 0)),
        ("CAS", "Convoke and sanguine", 2, "King", 4, Decimal::new(17550, 2)),
        ("HBB", "Harbinger but bequest", 1, "Queen", 2, Decimal::new(100, 0)),
        ("RND", "Recluse and defiance", 1, "King", 2, Decimal::new(150, 0)),
    ]
    .into_iter()
    .map(|(code, name, beds, bed_type, max, rate)| {
        Room::builder(code, name)
            .beds(beds, bed_type)
            .max_occupancy(max)
            .base_rate(rate)
            .build()
            .unwrap()
    })
    .collect()
}

/// A two-adult stay for Ada Lovelace at a flat 200.
///
/// # Panics
///
/// Panics if `check_out` is not after `check_in`.
#[must_use]
pub fn new_reservation(room: &str, check_in: NaiveDate, check_out: NaiveDate) -> NewReservation {
    Reservation::builder(
        room,
        StayDates::new(check_in, check_out).unwrap(),
        Guest::new("Ada", "Lovelace").unwrap(),
    )
    .guests(GuestCounts::new(2, 0))
    .rate(Decimal::new(200, 0))
    .build_new()
}
