//! Rooms command implementation.
//!
//! Lists the catalog with each room's popularity, next check-in, and length
//! of its most recent stay.

use chrono::NaiveDate;
use clap::Args;
use inn::config::OutputFormat;
use inn::{room_report, stay_statistics, HotelStore, RoomReport};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, output_format, today, GlobalOptions, Tabular};

/// Column headers for delimited output.
const COLUMN_HEADERS: [&str; 10] = [
    "room",
    "name",
    "beds",
    "bed_type",
    "max_occupancy",
    "base_rate",
    "decor",
    "popularity",
    "next_check_in",
    "last_stay_nights",
];

/// List rooms with popularity and upcoming availability.
#[derive(Args)]
pub struct RoomsCommand {
    /// Report as of this day (default: configured reference date, else today)
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Popularity window in days (default: configured, else 180)
    #[arg(long, value_name = "DAYS", value_parser = clap::value_parser!(u32).range(1..))]
    pub window_days: Option<u32>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config, false)?;

        let as_of = self.as_of.unwrap_or_else(|| config.as_of(today()));
        let window = self.window_days.unwrap_or_else(|| config.popularity_window());

        let ledger = db.list_reservations()?;
        let report = room_report(&db.list_rooms()?, &ledger, as_of, window)?;

        let format = output_format(self.format, &config);
        Tabular {
            headers: &COLUMN_HEADERS,
            rows: report.iter().map(row).collect(),
            records: &report,
        }
        .print(format)?;

        if format == OutputFormat::Table && !global.quiet {
            let stats = stay_statistics(&ledger)?;
            eprintln!();
            eprintln!(
                "{} room(s) as of {as_of}; {} stay(s), {} night(s), {} night(s) per stay",
                report.len(),
                stats.stays,
                stats.nights,
                stats.average_nights
            );
        }

        Ok(())
    }
}

fn row(report: &RoomReport) -> Vec<String> {
    let room = &report.room;
    vec![
        room.code().to_string(),
        room.name().to_string(),
        room.bed_count().to_string(),
        room.bed_type().to_string(),
        room.max_occupancy().to_string(),
        format!("{:.2}", room.base_rate()),
        room.decor().to_string(),
        format!("{:.2}", report.popularity),
        report.next_check_in.to_string(),
        report.last_stay_nights.to_string(),
    ]
}
