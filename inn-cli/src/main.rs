//! Main entry point for the inn CLI.
//!
//! This is the command-line interface for the inn reservation system.
//! It provides commands for working with the ledger:
//! - `rooms`: List rooms with popularity and next check-in
//! - `reserve`: Book a room
//! - `cancel`: Cancel a reservation
//! - `lookup`: Find reservations
//! - `import-rooms`: Load catalog rows from CSV

use clap::Parser;
use inn_cli::cli::{Cli, Command};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records to stderr at the chosen verbosity
    let logger = inn::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: {e}");
    }

    let global = cli.global_options();

    // Execute the command
    let result = match cli.command {
        Command::Rooms(cmd) => cmd.execute(&global),
        Command::Reserve(cmd) => cmd.execute(&global),
        Command::Cancel(cmd) => cmd.execute(&global),
        Command::Lookup(cmd) => cmd.execute(&global),
        Command::ImportRooms(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
