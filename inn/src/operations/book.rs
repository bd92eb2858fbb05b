//! Booking planning and execution.
//!
//! A booking attempt moves through [`BookingStage`]s: the request is
//! validated, the party is checked against the catalog's capacity, free
//! rooms are queried, the guest picks one (or cancels), the stay is priced,
//! and the reservation is persisted.

use std::fmt;
use std::str::FromStr;

use crate::availability::{check_capacity, match_rooms, Availability, AvailabilityQuery};
use crate::error::{Error, Result};
use crate::pricing::stay_cost;
use crate::reservation::{Guest, GuestCounts, Reservation, StayDates};
use crate::room::Filter;
use crate::store::HotelStore;

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// Stages of a single booking attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingStage {
    /// Request fields gathered and validated.
    Collecting,
    /// The party fits at least one room in the catalog.
    CapacityChecked,
    /// Candidate rooms computed.
    RoomsQueried,
    /// A candidate was chosen.
    RoomSelected,
    /// The stay was priced.
    Priced,
    /// The reservation was written.
    Persisted,
    /// The reservation code was returned.
    Confirmed,
}

impl fmt::Display for BookingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Collecting => "collecting",
            Self::CapacityChecked => "capacity-checked",
            Self::RoomsQueried => "rooms-queried",
            Self::RoomSelected => "room-selected",
            Self::Priced => "priced",
            Self::Persisted => "persisted",
            Self::Confirmed => "confirmed",
        };
        f.write_str(name)
    }
}

fn enter(stage: BookingStage) {
    log::debug!("booking stage: {stage}");
}

/// A guest's answer when presented with candidate rooms.
///
/// # Examples
///
/// ```
/// use inn::operations::Selection;
///
/// assert_eq!("2".parse::<Selection>().unwrap(), Selection::Index(2));
/// assert_eq!("Cancel".parse::<Selection>().unwrap(), Selection::Cancel);
/// assert!("two".parse::<Selection>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 1-based index into the presented list.
    Index(usize),
    /// Abandon the booking without changes.
    Cancel,
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("cancel") {
            return Ok(Self::Cancel);
        }
        trimmed
            .parse::<usize>()
            .map(Self::Index)
            .map_err(|_| Error::Validation {
                field: "selection".into(),
                message: format!("expected a room number or 'cancel', got '{trimmed}'"),
            })
    }
}

/// Presents candidate rooms and returns the guest's choice.
pub trait RoomChooser {
    /// Chooses from `offer`.
    ///
    /// # Errors
    ///
    /// Implementations may fail if the choice cannot be obtained.
    fn choose(&mut self, offer: &Availability) -> Result<Selection>;
}

/// A choice made ahead of time.
impl RoomChooser for Selection {
    fn choose(&mut self, _offer: &Availability) -> Result<Selection> {
        Ok(*self)
    }
}

/// Options for a booking attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOptions {
    /// The guest the reservation is held under.
    pub guest: Guest,

    /// The requested stay.
    pub stay: StayDates,

    /// The party size.
    pub guests: GuestCounts,

    /// Room code filter.
    pub room: Filter,

    /// Bed type filter.
    pub bed_type: Filter,

    /// Plan only; never write.
    pub dry_run: bool,
}

impl BookOptions {
    /// Creates options with wildcard room and bed type filters.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use inn::operations::BookOptions;
    /// use inn::{Filter, Guest, GuestCounts, StayDates};
    ///
    /// let stay = StayDates::new(
    ///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    /// ).unwrap();
    /// let options = BookOptions::new(Guest::new("Ada", "Lovelace").unwrap(), stay, GuestCounts::new(2, 0))
    ///     .with_bed_type(Filter::Only("Queen".into()));
    /// assert!(options.room.is_any());
    /// assert!(!options.dry_run);
    /// ```
    #[must_use]
    pub fn new(guest: Guest, stay: StayDates, guests: GuestCounts) -> Self {
        Self {
            guest,
            stay,
            guests,
            room: Filter::Any,
            bed_type: Filter::Any,
            dry_run: false,
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

    /// Sets the dry-run flag.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn query(&self) -> AvailabilityQuery {
        AvailabilityQuery::new(self.stay, self.guests)
            .with_room(self.room.clone())
            .with_bed_type(self.bed_type.clone())
    }
}

/// Plans a booking.
pub struct BookPlan {
    options: BookOptions,
}

impl BookPlan {
    /// Creates a planner for `options`.
    #[must_use]
    pub const fn new(options: BookOptions) -> Self {
        Self { options }
    }

    /// Runs every stage up to pricing and returns the resulting plan.
    ///
    /// The plan is empty when the chooser cancels.
    ///
    /// # Errors
    ///
    /// - [`Error::CapacityExceeded`] if the party fits no room
    /// - [`Error::NoRoomsAvailable`] if there is nothing to offer
    /// - [`Error::SelectionOutOfRange`] if the choice is not in `1..=N`
    /// - [`Error::Validation`] if the price overflows
    /// - store errors
    pub fn build_plan<S, C>(&self, store: &S, chooser: &mut C) -> Result<OperationPlan>
    where
        S: HotelStore + ?Sized,
        C: RoomChooser + ?Sized,
    {
        let options = &self.options;
        enter(BookingStage::Collecting);
        let query = options.query();

        check_capacity(store, query.total_guests)?;
        enter(BookingStage::CapacityChecked);

        let offer = match_rooms(store, &query)?;
        enter(BookingStage::RoomsQueried);

        if offer.is_empty() {
            return Err(Error::NoRoomsAvailable {
                guests: query.total_guests,
            });
        }

        let index = match chooser.choose(&offer)? {
            Selection::Cancel => {
                log::info!("booking cancelled at room selection");
                return Ok(OperationPlan::new("Booking cancelled at room selection"));
            }
            Selection::Index(index) => index,
        };
        let room = offer.get(index).ok_or(Error::SelectionOutOfRange {
            index,
            available: offer.len(),
        })?;
        enter(BookingStage::RoomSelected);

        let rate = stay_cost(&options.stay, room.base_rate())?;
        enter(BookingStage::Priced);

        let new = Reservation::builder(room.code(), options.stay, options.guest.clone())
            .guests(options.guests)
            .rate(rate)
            .build_new();

        let mut plan = OperationPlan::new(format!("Book room {} for {}", room.code(), options.stay))
            .add_action(PlanAction::CreateReservation(new));
        if offer.is_alternates() {
            plan = plan.add_warning(format!(
                "room {} was offered as an alternate and was not checked for {}",
                room.code(),
                options.stay
            ));
        }
        Ok(plan)
    }
}

/// What a booking attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The reservation was persisted.
    Booked(Reservation),
    /// The guest cancelled at room selection; nothing was written.
    Cancelled,
    /// Dry run: the plan that would have been executed.
    Planned(OperationPlan),
}

/// Books a reservation.
///
/// # Errors
///
/// Returns any error from [`BookPlan::build_plan`] or from the insert.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use inn::operations::{book_reservation, BookOptions, BookingOutcome, Selection};
/// use inn::{Database, DatabaseConfig, Guest, GuestCounts, StayDates};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/inn.db")).unwrap();
/// let stay = StayDates::new(
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
/// ).unwrap();
/// let options = BookOptions::new(Guest::new("Ada", "Lovelace").unwrap(), stay, GuestCounts::new(2, 0));
///
/// if let BookingOutcome::Booked(r) = book_reservation(&mut db, options, &mut Selection::Index(1)).unwrap() {
///     println!("confirmation code {}", r.code());
/// }
/// ```
pub fn book_reservation<S, C>(
    store: &mut S,
    options: BookOptions,
    chooser: &mut C,
) -> Result<BookingOutcome>
where
    S: HotelStore + ?Sized,
    C: RoomChooser + ?Sized,
{
    let dry_run = options.dry_run;
    let plan = BookPlan::new(options).build_plan(&*store, chooser)?;

    if plan.is_empty() {
        return Ok(BookingOutcome::Cancelled);
    }
    for warning in &plan.warnings {
        log::warn!("{warning}");
    }
    if dry_run {
        return Ok(BookingOutcome::Planned(plan));
    }

    let result = PlanExecutor::new(store).execute(&plan)?;
    enter(BookingStage::Persisted);

    let reservation = result.created.ok_or_else(|| Error::NotFound {
        resource: "created reservation".into(),
    })?;
    enter(BookingStage::Confirmed);
    Ok(BookingOutcome::Booked(reservation))
}
