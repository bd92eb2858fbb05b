//! SQL behind the [`HotelStore`] implementation for [`Database`].

use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Row, TransactionBehavior};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::operations::ReservationFilter;
use crate::reservation::{
    Guest, GuestCounts, NewReservation, Reservation, ReservationCode, ReservationDetail, StayDates,
};
use crate::room::Room;
use crate::store::HotelStore;

use super::connection::Database;

const SELECT_ROOMS: &str = r"
    SELECT RoomCode, RoomName, Beds, bedType, maxOcc, basePrice, decor
    FROM rooms
    ORDER BY RoomCode
";

const SELECT_MAX_OCCUPANCY: &str = "SELECT COALESCE(MAX(maxOcc), 0) FROM rooms";

const SELECT_ROOM_EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM rooms WHERE RoomCode = ?1)";

// ?1 is the requested check-out, ?2 the requested check-in
const SELECT_BOOKED_ROOMS: &str = r"
    SELECT DISTINCT Room
    FROM reservations
    WHERE CheckIn < ?1 AND Checkout > ?2
    ORDER BY Room
";

const COUNT_ROOM_OVERLAPS: &str = r"
    SELECT COUNT(*)
    FROM reservations
    WHERE Room = ?1 AND CheckIn < ?2 AND Checkout > ?3
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (Room, CheckIn, Checkout, Rate, LastName, FirstName, Adults, Kids)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
";

const RESERVATION_COLUMNS: &str =
    "r.CODE, r.Room, r.CheckIn, r.Checkout, r.Rate, r.LastName, r.FirstName, r.Adults, r.Kids";

const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE CODE = ?1";

const SEARCH_FILTERS: &str = r"
    WHERE (?1 IS NULL OR r.FirstName = ?1)
      AND (?2 IS NULL OR r.LastName = ?2)
      AND (?3 IS NULL OR r.CODE = ?3)
      AND (?4 IS NULL OR r.Room = ?4)
      AND (?5 IS NULL OR r.CheckIn = ?5)
      AND (?6 IS NULL OR r.Checkout = ?6)
    ORDER BY r.CheckIn, r.CODE
";

const UPSERT_ROOM: &str = r"
    INSERT INTO rooms (RoomCode, RoomName, Beds, bedType, maxOcc, basePrice, decor)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    ON CONFLICT(RoomCode) DO UPDATE SET
        RoomName = excluded.RoomName,
        Beds = excluded.Beds,
        bedType = excluded.bedType,
        maxOcc = excluded.maxOcc,
        basePrice = excluded.basePrice,
        decor = excluded.decor
";

fn conversion_error(column: usize, err: impl std::error::Error + Send + Sync + 'static) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

fn decimal_column(row: &Row<'_>, column: usize) -> rusqlite::Result<Decimal> {
    let text: String = row.get(column)?;
    Decimal::from_str(&text).map_err(|e| conversion_error(column, e))
}

/// Expects: `RoomCode, RoomName, Beds, bedType, maxOcc, basePrice, decor`.
fn row_to_room(row: &Row<'_>) -> rusqlite::Result<Room> {
    Room::builder(row.get::<_, String>(0)?, row.get::<_, String>(1)?)
        .beds(row.get(2)?, row.get::<_, String>(3)?)
        .max_occupancy(row.get(4)?)
        .base_rate(decimal_column(row, 5)?)
        .decor(row.get::<_, String>(6)?)
        .build()
        .map_err(|e| conversion_error(0, e))
}

/// Expects [`RESERVATION_COLUMNS`] in order.
fn row_to_reservation(row: &Row<'_>) -> rusqlite::Result<Reservation> {
    let check_in: NaiveDate = row.get(2)?;
    let check_out: NaiveDate = row.get(3)?;
    let stay = StayDates::new(check_in, check_out).map_err(|e| conversion_error(3, e))?;
    let guest = Guest::new(row.get::<_, String>(6)?, row.get::<_, String>(5)?)
        .map_err(|e| conversion_error(5, e))?;

    Ok(Reservation::builder(row.get::<_, String>(1)?, stay, guest)
        .guests(GuestCounts::new(row.get(7)?, row.get(8)?))
        .rate(decimal_column(row, 4)?)
        .build(ReservationCode::new(row.get(0)?)))
}

impl Database {
    /// Inserts or replaces catalog rows by room code, in one transaction.
    ///
    /// Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails; nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use inn::{read_catalog_csv, Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/inn.db")).unwrap();
    /// let rooms = read_catalog_csv(std::fs::File::open("rooms.csv").unwrap()).unwrap();
    /// db.upsert_rooms(&rooms).unwrap();
    /// ```
    pub fn upsert_rooms(&mut self, rooms: &[Room]) -> Result<usize> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        {
            let mut stmt = tx.prepare(UPSERT_ROOM)?;
            for room in rooms {
                stmt.execute(params![
                    room.code(),
                    room.name(),
                    room.bed_count(),
                    room.bed_type(),
                    room.max_occupancy(),
                    room.base_rate().to_string(),
                    room.decor(),
                ])?;
            }
        }
        tx.commit()?;
        log::info!("catalog updated with {} room(s)", rooms.len());
        Ok(rooms.len())
    }

    fn query_reservations(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<ReservationDetail>> {
        let sql = format!(
            "SELECT {RESERVATION_COLUMNS}, COALESCE(m.RoomName, '') \
             FROM reservations r LEFT JOIN rooms m ON m.RoomCode = r.Room {SEARCH_FILTERS}"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![
                filter.first_name,
                filter.last_name,
                filter.code.map(ReservationCode::value),
                filter.room,
                filter.check_in,
                filter.check_out,
            ],
            |row| {
                Ok(ReservationDetail {
                    reservation: row_to_reservation(row)?,
                    room_name: row.get(9)?,
                })
            },
        )?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

impl HotelStore for Database {
    fn list_rooms(&self) -> Result<Vec<Room>> {
        let mut stmt = self.conn.prepare(SELECT_ROOMS)?;
        let rooms = stmt.query_map([], row_to_room)?;
        Ok(rooms.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn max_occupancy(&self) -> Result<u32> {
        Ok(self
            .conn
            .query_row(SELECT_MAX_OCCUPANCY, [], |row| row.get(0))?)
    }

    fn booked_rooms(&self, stay: &StayDates) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_BOOKED_ROOMS)?;
        let codes = stmt.query_map(params![stay.check_out(), stay.check_in()], |row| row.get(0))?;
        Ok(codes.collect::<rusqlite::Result<Vec<String>>>()?)
    }

    fn insert_reservation(&mut self, reservation: &NewReservation) -> Result<Reservation> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let room_exists: bool =
            tx.query_row(SELECT_ROOM_EXISTS, params![reservation.room], |row| row.get(0))?;
        if !room_exists {
            return Err(Error::NotFound {
                resource: format!("room {}", reservation.room),
            });
        }

        // Re-checked under the write lock; availability was read without it
        let overlaps: i64 = tx.query_row(
            COUNT_ROOM_OVERLAPS,
            params![
                reservation.room,
                reservation.stay.check_out(),
                reservation.stay.check_in()
            ],
            |row| row.get(0),
        )?;
        if overlaps > 0 {
            return Err(Error::ReservationConflict {
                details: format!(
                    "room {} is already booked for part of {}",
                    reservation.room, reservation.stay
                ),
            });
        }

        tx.execute(
            INSERT_RESERVATION,
            params![
                reservation.room,
                reservation.stay.check_in(),
                reservation.stay.check_out(),
                reservation.rate.to_string(),
                reservation.guest.last_name(),
                reservation.guest.first_name(),
                reservation.guests.adults,
                reservation.guests.children,
            ],
        )?;
        let code = ReservationCode::new(tx.last_insert_rowid());
        tx.commit()?;

        Ok(reservation.clone().with_code(code))
    }

    fn get_reservation(&self, code: ReservationCode) -> Result<Option<Reservation>> {
        let filter = ReservationFilter::default().with_code(code);
        Ok(self
            .query_reservations(&filter)?
            .into_iter()
            .next()
            .map(|detail| detail.reservation))
    }

    fn delete_reservation(&mut self, code: ReservationCode) -> Result<bool> {
        let deleted = self.conn.execute(DELETE_RESERVATION, params![code.value()])?;
        Ok(deleted > 0)
    }

    fn search_reservations(&self, filter: &ReservationFilter) -> Result<Vec<ReservationDetail>> {
        self.query_reservations(filter)
    }

    fn list_reservations(&self) -> Result<Vec<Reservation>> {
        Ok(self
            .query_reservations(&ReservationFilter::default())?
            .into_iter()
            .map(|detail| detail.reservation)
            .collect())
    }
}
