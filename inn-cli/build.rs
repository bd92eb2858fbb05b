//! Build script for inn-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("inn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book rooms at a single property")
        .long_about(
            "Command-line tool for pricing, booking, cancelling, and looking up hotel room reservations",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("INN_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("INN_BUSY_TIMEOUT"),
        )
        .subcommands(vec![
            Command::new("rooms")
                .about("List rooms with popularity and next check-in")
                .long_about("Show every room with its share of occupied nights in the popularity window, its next check-in, and the length of its last stay"),
            Command::new("reserve")
                .about("Book a room")
                .long_about("Find free rooms for a stay, offer similar rooms when none match, and book the chosen one"),
            Command::new("cancel")
                .about("Cancel a reservation")
                .long_about("Delete a reservation by confirmation code after confirmation"),
            Command::new("lookup")
                .about("Look up reservations")
                .long_about("List reservations matching every given name, code, room, or date criterion"),
            Command::new("import-rooms")
                .about("Load or update catalog rooms from CSV")
                .long_about("Create the ledger if needed and insert or replace rooms from a catalog CSV file"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("inn.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
