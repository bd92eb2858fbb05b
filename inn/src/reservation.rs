//! Reservation types for the booking ledger.
//!
//! This module provides the ledger's value types: reservation codes, stay
//! date ranges, guest counts, and the reservation record itself together
//! with its builder.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::room::ValidationError;

/// A store-assigned reservation code.
///
/// # Examples
///
/// ```
/// use inn::ReservationCode;
///
/// let code = ReservationCode::new(10105);
/// assert_eq!(code.value(), 10105);
/// assert_eq!(code.to_string(), "10105");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationCode(i64);

impl ReservationCode {
    /// Wraps a raw code.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying code.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A half-open stay interval `[check_in, check_out)`.
///
/// The check-out day is not a night of the stay.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use inn::StayDates;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
/// let stay = StayDates::new(d(1), d(3)).unwrap();
/// assert_eq!(stay.nights(), 2);
///
/// // Back-to-back stays do not overlap
/// let next = StayDates::new(d(3), d(5)).unwrap();
/// assert!(!stay.overlaps(&next));
///
/// // Zero-night stays are rejected
/// assert!(StayDates::new(d(3), d(3)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    /// Creates a validated stay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] unless `check_out` is strictly after
    /// `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self> {
        if check_out <= check_in {
            return Err(Error::InvalidRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the arrival date.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the departure date.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the number of charged nights.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Iterates over the start date of every night in the stay.
    pub fn each_night(&self) -> impl Iterator<Item = NaiveDate> {
        let check_out = self.check_out;
        self.check_in.iter_days().take_while(move |d| *d < check_out)
    }

    /// Half-open interval intersection.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

impl fmt::Display for StayDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.check_in, self.check_out)
    }
}

/// Returns true for nights starting on Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Adults and children in a party.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestCounts {
    /// Number of adults.
    pub adults: u32,
    /// Number of children.
    pub children: u32,
}

impl GuestCounts {
    /// Creates a party.
    #[must_use]
    pub const fn new(adults: u32, children: u32) -> Self {
        Self { adults, children }
    }

    /// Returns adults plus children.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }
}

/// The guest a reservation is held under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guest {
    first_name: String,
    last_name: String,
}

impl Guest {
    /// Creates a guest.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is empty after trimming whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use inn::Guest;
    ///
    /// assert!(Guest::new("Ada", "Lovelace").is_ok());
    /// assert!(Guest::new(" ", "Lovelace").is_err());
    /// ```
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> std::result::Result<Self, ValidationError> {
        let first_name = first_name.into().trim().to_string();
        let last_name = last_name.into().trim().to_string();
        if first_name.is_empty() {
            return Err(ValidationError::new("first_name", "first name must be non-empty"));
        }
        if last_name.is_empty() {
            return Err(ValidationError::new("last_name", "last name must be non-empty"));
        }
        Ok(Self {
            first_name,
            last_name,
        })
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A stay that has been priced but not yet persisted.
///
/// The store assigns the code on insert, turning it into a [`Reservation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    /// Code of the booked room.
    pub room: String,
    /// The stay interval.
    pub stay: StayDates,
    /// Total cost of the stay.
    pub rate: Decimal,
    /// The guest the room is held under.
    pub guest: Guest,
    /// The party size.
    pub guests: GuestCounts,
}

impl NewReservation {
    /// Attaches the store-assigned code.
    #[must_use]
    pub fn with_code(self, code: ReservationCode) -> Reservation {
        Reservation {
            code,
            room: self.room,
            stay: self.stay,
            rate: self.rate,
            guest: self.guest,
            guests: self.guests,
        }
    }
}

/// A persisted reservation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use inn::{Guest, GuestCounts, Reservation, ReservationCode, StayDates};
/// use rust_decimal::Decimal;
///
/// let stay = StayDates::new(
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
/// ).unwrap();
///
/// let reservation = Reservation::builder("HBB", stay, Guest::new("Ada", "Lovelace").unwrap())
///     .guests(GuestCounts::new(2, 0))
///     .rate(Decimal::new(200, 0))
///     .build(ReservationCode::new(1));
///
/// assert_eq!(reservation.room(), "HBB");
/// assert_eq!(reservation.stay().nights(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    code: ReservationCode,
    room: String,
    stay: StayDates,
    rate: Decimal,
    guest: Guest,
    guests: GuestCounts,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(room: impl Into<String>, stay: StayDates, guest: Guest) -> ReservationBuilder {
        ReservationBuilder {
            room: room.into(),
            stay,
            guest,
            guests: GuestCounts::default(),
            rate: Decimal::ZERO,
        }
    }

    /// Returns the reservation code.
    #[must_use]
    pub const fn code(&self) -> ReservationCode {
        self.code
    }

    /// Returns the booked room code.
    #[must_use]
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Returns the stay interval.
    #[must_use]
    pub const fn stay(&self) -> &StayDates {
        &self.stay
    }

    /// Returns the total cost of the stay.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Returns the guest.
    #[must_use]
    pub const fn guest(&self) -> &Guest {
        &self.guest
    }

    /// Returns the party size.
    #[must_use]
    pub const fn guests(&self) -> GuestCounts {
        self.guests
    }
}

/// Builder for [`Reservation`] and [`NewReservation`].
#[derive(Debug, Clone)]
pub struct ReservationBuilder {
    room: String,
    stay: StayDates,
    guest: Guest,
    guests: GuestCounts,
    rate: Decimal,
}

impl ReservationBuilder {
    /// Sets the party size.
    #[must_use]
    pub const fn guests(mut self, guests: GuestCounts) -> Self {
        self.guests = guests;
        self
    }

    /// Sets the total cost.
    #[must_use]
    pub const fn rate(mut self, rate: Decimal) -> Self {
        self.rate = rate;
        self
    }

    /// Builds an unpersisted reservation.
    #[must_use]
    pub fn build_new(self) -> NewReservation {
        NewReservation {
            room: self.room,
            stay: self.stay,
            rate: self.rate,
            guest: self.guest,
            guests: self.guests,
        }
    }

    /// Builds a reservation carrying `code`.
    #[must_use]
    pub fn build(self, code: ReservationCode) -> Reservation {
        self.build_new().with_code(code)
    }
}

/// A reservation joined with the name of its room, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDetail {
    /// The reservation.
    pub reservation: Reservation,
    /// Display name of the booked room.
    pub room_name: String,
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
