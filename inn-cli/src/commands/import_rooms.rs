//! Import-rooms command implementation.
//!
//! Loads a catalog CSV into the ledger, creating the data directory and
//! database on first use. Rows whose room code already exists replace the
//! stored room.

use std::fs::File;
use std::path::PathBuf;

use clap::Args;
use inn::read_catalog_csv;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Load or update catalog rooms from CSV.
#[derive(Args)]
pub struct ImportRoomsCommand {
    /// CSV file with header `RoomCode,RoomName,Beds,bedType,maxOcc,basePrice,decor`
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ImportRoomsCommand {
    /// Execute the import-rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Parse everything before opening the ledger so a bad file writes nothing
        let file = File::open(&self.file)?;
        let rooms = read_catalog_csv(file).map_err(|e| match e {
            inn::Error::Csv(e) => CliError::InvalidArguments(format!(
                "{}: {e}",
                self.file.display()
            )),
            other => CliError::from(other),
        })?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config, true)?;
        let count = db.upsert_rooms(&rooms)?;

        if !global.quiet {
            eprintln!("Imported {count} room(s) from {}", self.file.display());
        }

        Ok(())
    }
}
