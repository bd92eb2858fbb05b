//! CLI command implementations.
//!
//! - `rooms`: List rooms with popularity and next check-in
//! - `reserve`: Book a room
//! - `cancel`: Cancel a reservation by code
//! - `lookup`: Find reservations
//! - `import_rooms`: Load catalog rows from CSV
//! - `completions`: Generate shell completion scripts

pub mod cancel;
pub mod completions;
pub mod import_rooms;
pub mod lookup;
pub mod reserve;
pub mod rooms;

pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use import_rooms::ImportRoomsCommand;
pub use lookup::LookupCommand;
pub use reserve::ReserveCommand;
pub use rooms::RoomsCommand;
