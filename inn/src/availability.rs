//! Room availability.
//!
//! Given a stay, room and bed-type filters and a party size, this module
//! decides which rooms can be offered. When nothing matches exactly it
//! falls back to a short list of rooms that are similar in size.
//!
//! Alternates are chosen from the whole catalog by capacity alone. They are
//! not checked against the ledger and may be booked for the requested dates.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::reservation::{GuestCounts, StayDates};
use crate::room::{Filter, Room};
use crate::store::HotelStore;

/// Maximum number of alternates offered.
pub const MAX_ALTERNATES: usize = 5;

/// An availability request.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use inn::{AvailabilityQuery, Filter, GuestCounts, StayDates};
///
/// let stay = StayDates::new(
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
/// ).unwrap();
///
/// let query = AvailabilityQuery::new(stay, GuestCounts::new(2, 1))
///     .with_bed_type(Filter::Only("King".into()));
/// assert_eq!(query.total_guests, 3);
/// assert!(query.room.is_any());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    /// The requested stay.
    pub stay: StayDates,
    /// Room code filter.
    pub room: Filter,
    /// Bed type filter.
    pub bed_type: Filter,
    /// Adults plus children.
    pub total_guests: u32,
}

impl AvailabilityQuery {
    /// Creates a query with wildcard filters.
    #[must_use]
    pub fn new(stay: StayDates, guests: GuestCounts) -> Self {
        Self {
            stay,
            room: Filter::Any,
            bed_type: Filter::Any,
            total_guests: guests.total(),
        }
    }

    /// Sets the room code filter.
    #[must_use]
    pub fn with_room(mut self, room: Filter) -> Self {
        self.room = room;
        self
    }

    /// Sets the bed type filter.
    #[must_use]
    pub fn with_bed_type(mut self, bed_type: Filter) -> Self {
        self.bed_type = bed_type;
        self
    }

    /// Returns true if `room` satisfies the filters and can hold the party.
    ///
    /// Availability for the dates is checked separately.
    #[must_use]
    pub fn accepts(&self, room: &Room) -> bool {
        self.room.matches(room.code())
            && self.bed_type.matches(room.bed_type())
            && room.max_occupancy() >= self.total_guests
    }
}

/// Rooms offered for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// Free rooms matching every filter, ordered by room code.
    Exact(Vec<Room>),
    /// Nothing matched; the most similar rooms by size, unchecked for dates.
    Alternates(Vec<Room>),
}

impl Availability {
    /// Returns the offered rooms in presentation order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        match self {
            Self::Exact(rooms) | Self::Alternates(rooms) => rooms,
        }
    }

    /// Returns the number of offered rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms().len()
    }

    /// Returns true if no room is offered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms().is_empty()
    }

    /// Returns true for the fallback list.
    #[must_use]
    pub const fn is_alternates(&self) -> bool {
        matches!(self, Self::Alternates(_))
    }

    /// Returns the room at a 1-based presentation index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Room> {
        index.checked_sub(1).and_then(|i| self.rooms().get(i))
    }
}

/// Distance between a room's size and the party; lower is more similar.
///
/// # Examples
///
/// ```
/// use inn::{availability::similarity, Room};
/// use rust_decimal::Decimal;
///
/// let room = Room::builder("A1", "A").beds(2, "Queen").max_occupancy(4)
///     .base_rate(Decimal::ONE).build().unwrap();
/// assert_eq!(similarity(&room, 3), 1);
/// ```
#[must_use]
pub fn similarity(room: &Room, total_guests: u32) -> u32 {
    room.max_occupancy()
        .abs_diff(total_guests)
        .min(room.bed_count().abs_diff(total_guests))
}

/// Ranks catalog rooms that can hold the party by similarity.
///
/// Ties keep catalog order. At most [`MAX_ALTERNATES`] rooms are returned.
#[must_use]
pub fn rank_alternates(catalog: &[Room], total_guests: u32) -> Vec<Room> {
    let mut candidates: Vec<&Room> = catalog
        .iter()
        .filter(|room| room.max_occupancy() >= total_guests)
        .collect();
    candidates.sort_by_key(|room| similarity(room, total_guests));
    candidates
        .into_iter()
        .take(MAX_ALTERNATES)
        .cloned()
        .collect()
}

/// Fails if no room in the catalog can hold the party.
///
/// # Errors
///
/// Returns [`Error::CapacityExceeded`] when `total_guests` is above the
/// largest room, or a store error.
pub fn check_capacity<S: HotelStore + ?Sized>(store: &S, total_guests: u32) -> Result<u32> {
    let max = store.max_occupancy()?;
    if total_guests > max {
        log::debug!("capacity check failed: {total_guests} guest(s), largest room holds {max}");
        return Err(Error::CapacityExceeded {
            requested: total_guests,
            max,
        });
    }
    Ok(max)
}

/// Finds rooms to offer for `query`.
///
/// The capacity check runs first and short-circuits before the ledger is
/// consulted. Free matching rooms are returned in room code order; if there
/// are none, up to five alternates ranked by [`similarity`].
///
/// # Errors
///
/// Returns [`Error::CapacityExceeded`] if the party is larger than every
/// room, or a store error.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use inn::{find_available_rooms, AvailabilityQuery, Database, DatabaseConfig, GuestCounts, StayDates};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/inn.db")).unwrap();
/// let stay = StayDates::new(
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
/// ).unwrap();
/// let offer = find_available_rooms(&db, &AvailabilityQuery::new(stay, GuestCounts::new(2, 0))).unwrap();
/// for (i, room) in offer.rooms().iter().enumerate() {
///     println!("{}. {room}", i + 1);
/// }
/// ```
pub fn find_available_rooms<S: HotelStore + ?Sized>(
    store: &S,
    query: &AvailabilityQuery,
) -> Result<Availability> {
    check_capacity(store, query.total_guests)?;
    match_rooms(store, query)
}

/// Finds rooms to offer for `query` without checking capacity first.
///
/// Matching and fallback follow [`find_available_rooms`]. Callers that need
/// the capacity short-circuit run [`check_capacity`] before this.
///
/// # Errors
///
/// Returns a store error.
pub fn match_rooms<S: HotelStore + ?Sized>(store: &S, query: &AvailabilityQuery) -> Result<Availability> {
    let catalog = store.list_rooms()?;
    let booked: HashSet<String> = store.booked_rooms(&query.stay)?.into_iter().collect();

    let mut exact: Vec<Room> = catalog
        .iter()
        .filter(|room| !booked.contains(room.code()) && query.accepts(room))
        .cloned()
        .collect();
    exact.sort_by(|a, b| a.code().cmp(b.code()));

    if !exact.is_empty() {
        log::debug!("{} room(s) available for {}", exact.len(), query.stay);
        return Ok(Availability::Exact(exact));
    }

    let alternates = rank_alternates(&catalog, query.total_guests);
    log::warn!(
        "no exact match for {} (room {}, bed {}); offering {} alternate(s) not checked for dates",
        query.stay,
        query.room,
        query.bed_type,
        alternates.len()
    );
    Ok(Availability::Alternates(alternates))
}
