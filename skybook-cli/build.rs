//! Build script for skybook-cli.
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
    Command::new("skybook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book and manage flight reservations")
        .long_about("Command-line tool for booking and managing flight reservations stored in SQLite")
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
            Arg::new("database")
                .long("database")
                .help("Path of the reservation store file")
                .value_name("PATH")
                .global(true)
                .env("SKYBOOK_DATABASE"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("SKYBOOK_BUSY_TIMEOUT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Create the reservation store and its table")
                .long_about("Create the store file and its table if they do not exist yet"),
            Command::new("book")
                .about("Book a new reservation")
                .long_about("Validate the booking details and store a new reservation"),
            Command::new("list")
                .about("List all reservations, newest first")
                .long_about("Display all reservations in table, JSON, CSV or TSV format"),
            Command::new("show")
                .about("Show a single reservation")
                .long_about("Display one reservation by id"),
            Command::new("edit")
                .about("Change fields of an existing reservation")
                .long_about("Replace the given fields of a reservation, keeping the others"),
            Command::new("cancel")
                .about("Cancel a reservation")
                .long_about("Delete a reservation by id; cancelling a missing id is not an error"),
            Command::new("seed")
                .about("Add the bundled demo reservations")
                .long_about("Insert eight sample reservations into the store"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("skybook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
