//! Common test utilities for integration tests.
//!
//! Fixtures open a real on-disk database in a temporary directory so the
//! tests exercise WAL mode, transactions, and the schema bootstrap.

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

use inn::database::{Database, DatabaseConfig};
use inn::{Guest, GuestCounts, Room, StayDates};

/// A database and the directory that keeps it alive.
pub struct TestHotel {
    pub dir: TempDir,
    pub db: Database,
}

impl TestHotel {
    /// Opens a fresh database seeded with [`catalog`].
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut db = Database::open(DatabaseConfig::new(dir.path().join("inn.db"))).unwrap();
        db.upsert_rooms(&catalog()).unwrap();
        Self { dir, db }
    }

    /// Opens a second connection to the same file.
    pub fn reopen(&self) -> Database {
        Database::open(DatabaseConfig::new(self.dir.path().join("inn.db"))).unwrap()
    }
}

/// A day in 2024.
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

/// A stay in June 2024.
pub fn june(check_in: u32, check_out: u32) -> StayDates {
    StayDates::new(date(6, check_in), date(6, check_out)).unwrap()
}

pub fn ada() -> Guest {
    Guest::new("Ada", "Lovelace").unwrap()
}

pub fn grace() -> Guest {
    Guest::new("Grace", "Hopper").unwrap()
}

pub fn adults(count: u32) -> GuestCounts {
    GuestCounts::new(count, 0)
}

/// Three rooms: a small Queen at 100, a large King, and a small King.
pub fn catalog() -> Vec<Room> {
    [
        ("A1", "Garden view", 1, "Queen", 2, Decimal::new(100, 0)),
        ("B2", "Harbor suite", 2, "King", 4, Decimal::new(250, 0)),
        ("C3", "Attic nook", 1, "King", 2, Decimal::new(12000, 2)),
    ]
    .into_iter()
    .map(|(code, name, beds, bed_type, max, rate)| {
        Room::builder(code, name)
            .beds(beds, bed_type)
            .max_occupancy(max)
            .base_rate(rate)
            .decor("modern")
            .build()
            .unwrap()
    })
    .collect()
}
