//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which books a room for a
//! guest. Candidate rooms are listed on stderr and the choice is read from
//! stdin unless `--choice` is given. The confirmation code is the only
//! thing written to stdout.

use chrono::NaiveDate;
use clap::Args;
use inn::pricing::{nightly_breakdown, stay_cost};
use inn::{
    book_reservation, Availability, BookOptions, BookingOutcome, Filter, Guest, GuestCounts,
    HotelStore, OperationPlan, Room, RoomChooser, Selection, StayDates,
};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, prompt, GlobalOptions};

/// Book a room.
#[derive(Args)]
pub struct ReserveCommand {
    /// Guest first name
    #[arg(long, value_name = "NAME")]
    pub first_name: String,

    /// Guest last name
    #[arg(long, value_name = "NAME")]
    pub last_name: String,

    /// First night of the stay
    #[arg(long, value_name = "DATE")]
    pub check_in: NaiveDate,

    /// Departure day (not a night of the stay)
    #[arg(long, value_name = "DATE")]
    pub check_out: NaiveDate,

    /// Room code, or `Any`
    #[arg(long, value_name = "CODE", default_value = "Any")]
    pub room: Filter,

    /// Bed type, or `Any`
    #[arg(long, value_name = "TYPE", default_value = "Any")]
    pub bed_type: Filter,

    /// Number of adults
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub adults: u32,

    /// Number of children
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub children: u32,

    /// Candidate number to book, or `cancel` (default: ask on stdin)
    #[arg(long, value_name = "N|cancel")]
    pub choice: Option<Selection>,

    /// Show what would be booked without writing
    #[arg(long)]
    pub dry_run: bool,
}

/// Lists the offer on stderr and reads the answer from stdin.
struct PromptChooser {
    stay: StayDates,
}

impl RoomChooser for PromptChooser {
    fn choose(&mut self, offer: &Availability) -> inn::Result<Selection> {
        print_offer(offer, &self.stay)?;
        let answer = prompt(&format!("Choose a room (1-{}) or 'cancel': ", offer.len()))?;
        match answer {
            Some(answer) => answer.parse(),
            None => Err(inn::Error::Validation {
                field: "choice".into(),
                message: "no selection given on stdin".into(),
            }),
        }
    }
}

/// Uses a preselected answer, echoing the offer in verbose mode.
struct PresetChooser {
    selection: Selection,
    stay: StayDates,
    verbose: bool,
}

impl RoomChooser for PresetChooser {
    fn choose(&mut self, offer: &Availability) -> inn::Result<Selection> {
        if self.verbose {
            print_offer(offer, &self.stay)?;
        }
        Ok(self.selection)
    }
}

fn print_offer(offer: &Availability, stay: &StayDates) -> inn::Result<()> {
    if offer.is_alternates() {
        eprintln!("No exact match. Similar rooms (not checked for {stay}):");
    } else {
        eprintln!("Available rooms for {stay}:");
    }
    for (index, room) in offer.rooms().iter().enumerate() {
        eprintln!(
            "  {}. {} {} ({} {}, sleeps {}) {:.2} total",
            index + 1,
            room.code(),
            room.name(),
            room.bed_count(),
            room.bed_type(),
            room.max_occupancy(),
            stay_cost(stay, room.base_rate())?,
        );
    }
    Ok(())
}

fn print_plan(plan: &OperationPlan, room: Option<&Room>) -> inn::Result<()> {
    eprintln!("Dry run - {}:", plan.description);
    for action in &plan.actions {
        eprintln!("  - {}", action.description());
    }
    if let (Some(pending), Some(room)) = (plan.pending_reservation(), room) {
        for (night, charge) in nightly_breakdown(&pending.stay, room.base_rate())? {
            eprintln!("      {night} {} {charge:.2}", night.format("%a"));
        }
    }
    for warning in &plan.warnings {
        eprintln!("  ! {warning}");
    }
    Ok(())
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Validate inputs before touching the ledger
        let guest = Guest::new(self.first_name, self.last_name)?;
        let stay = StayDates::new(self.check_in, self.check_out)?;
        let guests = GuestCounts::new(self.adults, self.children);

        // 2. Load configuration and open the ledger
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config, false)?;

        // 3. Book
        let options = BookOptions::new(guest, stay, guests)
            .with_room(self.room)
            .with_bed_type(self.bed_type)
            .with_dry_run(self.dry_run);

        let outcome = match self.choice {
            Some(selection) => {
                let mut chooser = PresetChooser {
                    selection,
                    stay,
                    verbose: global.verbose,
                };
                book_reservation(&mut db, options, &mut chooser)?
            }
            None => book_reservation(&mut db, options, &mut PromptChooser { stay })?,
        };

        // 4. Report
        match outcome {
            BookingOutcome::Booked(reservation) => {
                if !global.quiet {
                    eprintln!(
                        "Booked room {} for {}, {}, total {:.2}",
                        reservation.room(),
                        reservation.guest(),
                        reservation.stay(),
                        reservation.rate()
                    );
                }
                println!("{}", reservation.code());
            }
            BookingOutcome::Cancelled => {
                if !global.quiet {
                    eprintln!("Booking cancelled; nothing was reserved");
                }
            }
            BookingOutcome::Planned(plan) => {
                if !global.quiet {
                    let rooms = db.list_rooms()?;
                    let room = plan
                        .pending_reservation()
                        .and_then(|pending| rooms.iter().find(|r| r.code() == pending.room));
                    print_plan(&plan, room)?;
                }
            }
        }

        Ok(())
    }
}
