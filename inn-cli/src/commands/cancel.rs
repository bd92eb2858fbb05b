//! Cancel command implementation.
//!
//! Deletes a reservation by confirmation code after the user agrees,
//! either with `--yes` or by answering the prompt on stdin.

use clap::Args;
use inn::{cancel_reservation, CancelOptions, CancelOutcome, Reservation, ReservationCode};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, prompt, GlobalOptions};

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Confirmation code of the reservation
    #[arg(value_name = "CODE")]
    pub code: i64,

    /// Do not ask for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Show what would be cancelled without writing
    #[arg(long)]
    pub dry_run: bool,
}

fn confirm_on_stdin(reservation: &Reservation) -> bool {
    let question = format!(
        "Cancel reservation {} for {} in room {}, {}? [y/N] ",
        reservation.code(),
        reservation.guest(),
        reservation.room(),
        reservation.stay()
    );
    match prompt(&question) {
        Ok(Some(answer)) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config, false)?;

        let options = CancelOptions::new(ReservationCode::new(self.code)).with_dry_run(self.dry_run);
        let yes = self.yes;
        let outcome = cancel_reservation(&mut db, options, |reservation| {
            yes || confirm_on_stdin(reservation)
        })?;

        match outcome {
            CancelOutcome::Cancelled(reservation) => {
                if !global.quiet {
                    eprintln!("Cancelled reservation {}", reservation.code());
                }
            }
            CancelOutcome::Aborted(reservation) => {
                if !global.quiet {
                    eprintln!("Reservation {} kept", reservation.code());
                }
            }
            CancelOutcome::NotFound(code) => {
                return Err(CliError::SemanticFailure(format!(
                    "No reservation with code {code}"
                )));
            }
            CancelOutcome::Planned(plan) => {
                if !global.quiet {
                    eprintln!("Dry run - {}:", plan.description);
                    for action in &plan.actions {
                        eprintln!("  - {}", action.description());
                    }
                }
            }
        }

        Ok(())
    }
}
