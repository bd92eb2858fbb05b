//! Lookup command implementation.
//!
//! Finds reservations matching every given criterion and prints them with
//! the booked room's name.

use chrono::NaiveDate;
use clap::Args;
use inn::config::OutputFormat;
use inn::{find_reservations, ReservationCode, ReservationDetail, ReservationFilter};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, output_format, GlobalOptions, Tabular};

/// Column headers for delimited output.
const COLUMN_HEADERS: [&str; 11] = [
    "code",
    "room",
    "room_name",
    "check_in",
    "check_out",
    "nights",
    "rate",
    "last_name",
    "first_name",
    "adults",
    "children",
];

/// Look up reservations.
#[derive(Args)]
pub struct LookupCommand {
    /// Guest first name (exact)
    #[arg(long, value_name = "NAME")]
    pub first_name: Option<String>,

    /// Guest last name (exact)
    #[arg(long, value_name = "NAME")]
    pub last_name: Option<String>,

    /// Confirmation code
    #[arg(long, value_name = "CODE")]
    pub code: Option<i64>,

    /// Room code
    #[arg(long, value_name = "CODE")]
    pub room: Option<String>,

    /// Exact check-in day
    #[arg(long, value_name = "DATE")]
    pub check_in: Option<NaiveDate>,

    /// Exact check-out day
    #[arg(long, value_name = "DATE")]
    pub check_out: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl LookupCommand {
    fn filter(&self) -> ReservationFilter {
        ReservationFilter {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            code: self.code.map(ReservationCode::new),
            room: self.room.clone(),
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }

    /// Execute the lookup command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config, false)?;

        let filter = self.filter();
        if filter.normalized().is_unrestricted() && global.verbose {
            eprintln!("No criteria given; listing every reservation");
        }

        let found = find_reservations(&db, &filter)?;

        Tabular {
            headers: &COLUMN_HEADERS,
            rows: found.iter().map(row).collect(),
            records: &found,
        }
        .print(output_format(self.format, &config))?;

        if found.is_empty() && !global.quiet {
            eprintln!("No matching reservations");
        }

        Ok(())
    }
}

fn row(detail: &ReservationDetail) -> Vec<String> {
    let r = &detail.reservation;
    vec![
        r.code().to_string(),
        r.room().to_string(),
        detail.room_name.clone(),
        r.stay().check_in().to_string(),
        r.stay().check_out().to_string(),
        r.stay().nights().to_string(),
        format!("{:.2}", r.rate()),
        r.guest().last_name().to_string(),
        r.guest().first_name().to_string(),
        r.guests().adults.to_string(),
        r.guests().children.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_onto_filter() {
        let command = LookupCommand {
            first_name: None,
            last_name: Some("Lovelace".into()),
            code: Some(10105),
            room: None,
            check_in: NaiveDate::from_ymd_opt(2024, 6, 1),
            check_out: None,
            format: None,
        };
        let filter = command.filter();
        assert_eq!(filter.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(filter.code, Some(ReservationCode::new(10105)));
        assert!(filter.room.is_none());
        assert!(!filter.is_unrestricted());
    }
}
