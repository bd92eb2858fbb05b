//! The storage seam between the booking engine and the ledger.
//!
//! Every query the engine needs is a method here. [`crate::Database`] is the
//! SQLite implementation; tests substitute a mock.

use crate::error::Result;
use crate::operations::ReservationFilter;
use crate::reservation::{NewReservation, Reservation, ReservationCode, ReservationDetail, StayDates};
use crate::room::Room;

/// Read and write access to the room catalog and reservation ledger.
#[cfg_attr(test, mockall::automock)]
pub trait HotelStore {
    /// Returns the whole catalog ordered by room code.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn list_rooms(&self) -> Result<Vec<Room>>;

    /// Returns the largest `max_occupancy` in the catalog, or 0 when empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn max_occupancy(&self) -> Result<u32>;

    /// Returns the codes of rooms holding a reservation that overlaps `stay`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn booked_rooms(&self, stay: &StayDates) -> Result<Vec<String>>;

    /// Persists a reservation and returns it with its assigned code.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; nothing is persisted in that case.
    fn insert_reservation(&mut self, reservation: &NewReservation) -> Result<Reservation>;

    /// Looks up one reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn get_reservation(&self, code: ReservationCode) -> Result<Option<Reservation>>;

    /// Deletes one reservation, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete_reservation(&mut self, code: ReservationCode) -> Result<bool>;

    /// Returns reservations matching `filter`, joined with room names.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn search_reservations(&self, filter: &ReservationFilter) -> Result<Vec<ReservationDetail>>;

    /// Returns the whole ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn list_reservations(&self) -> Result<Vec<Reservation>>;
}
