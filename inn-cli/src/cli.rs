//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    CancelCommand, CompletionsCommand, ImportRoomsCommand, LookupCommand, ReserveCommand,
    RoomsCommand,
};
use crate::utils::GlobalOptions;

/// Command-line tool for booking rooms at a single property.
#[derive(Parser)]
#[command(name = "inn")]
#[command(version, about = "Book rooms at a single property", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "INN_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "INN_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The options every command receives.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
            busy_timeout: self.busy_timeout,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List rooms with popularity and next check-in
    Rooms(RoomsCommand),

    /// Book a room
    Reserve(ReserveCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// Look up reservations
    Lookup(LookupCommand),

    /// Load or update catalog rooms from CSV
    ImportRooms(ImportRoomsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["inn", "cancel", "10105", "--quiet", "--data-dir", "/tmp/x"])
            .unwrap();
        let global = cli.global_options();
        assert!(global.quiet);
        assert_eq!(global.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Command::Cancel(ref c) if c.code == 10105 && !c.yes));
    }

    #[test]
    fn test_reserve_defaults() {
        let cli = Cli::try_parse_from([
            "inn",
            "reserve",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
            "--check-in",
            "2024-06-01",
            "--check-out",
            "2024-06-03",
        ])
        .unwrap();
        let Command::Reserve(reserve) = cli.command else {
            panic!("expected reserve");
        };
        assert!(reserve.room.is_any());
        assert!(reserve.bed_type.is_any());
        assert_eq!(reserve.adults, 1);
        assert_eq!(reserve.children, 0);
        assert!(reserve.choice.is_none());
    }

    #[test]
    fn test_reserve_rejects_bad_choice() {
        let result = Cli::try_parse_from([
            "inn",
            "reserve",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
            "--check-in",
            "2024-06-01",
            "--check-out",
            "2024-06-03",
            "--choice",
            "first",
        ]);
        assert!(result.is_err());
    }
}
