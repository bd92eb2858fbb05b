//! Table definitions and SQL constants.
//!
//! Column names are fixed by the ledger's established layout. Dates are
//! ISO-8601 text and money is canonical decimal text.

/// Current schema version, stored in the metadata table.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Key-value table for versioning.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// The room catalog.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        RoomCode TEXT PRIMARY KEY NOT NULL,
        RoomName TEXT NOT NULL,
        Beds INTEGER NOT NULL CHECK (Beds >= 1),
        bedType TEXT NOT NULL,
        maxOcc INTEGER NOT NULL CHECK (maxOcc >= 1),
        basePrice TEXT NOT NULL,
        decor TEXT NOT NULL DEFAULT ''
    )";

/// The reservation ledger.
///
/// Codes are never reused after a cancellation.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        CODE INTEGER PRIMARY KEY AUTOINCREMENT,
        Room TEXT NOT NULL REFERENCES rooms(RoomCode),
        CheckIn TEXT NOT NULL,
        Checkout TEXT NOT NULL,
        Rate TEXT NOT NULL,
        LastName TEXT NOT NULL,
        FirstName TEXT NOT NULL,
        Adults INTEGER NOT NULL CHECK (Adults >= 0),
        Kids INTEGER NOT NULL CHECK (Kids >= 0),
        CHECK (Checkout > CheckIn)
    )";

/// Speeds up the overlap scan.
pub const CREATE_ROOM_DATES_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_room_dates ON reservations(Room, CheckIn, Checkout)";

/// Speeds up name lookups.
pub const CREATE_GUEST_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_guest ON reservations(LastName, FirstName)";

/// Reads the schema version.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// Writes the schema version.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
