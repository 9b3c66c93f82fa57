//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookCommand, CancelCommand, CompletionsCommand, EditCommand, InitCommand, ListCommand,
    SeedCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking and managing flight reservations.
#[derive(Parser)]
#[command(name = "skybook")]
#[command(version, about = "Book and manage flight reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path of the reservation store file
    #[arg(long, value_name = "PATH", global = true, env = "SKYBOOK_DATABASE")]
    pub database: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "SKYBOOK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the reservation store and its table
    Init(InitCommand),

    /// Book a new reservation
    Book(BookCommand),

    /// List all reservations, newest first
    List(ListCommand),

    /// Show a single reservation
    Show(ShowCommand),

    /// Change fields of an existing reservation
    Edit(EditCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// Add the bundled demo reservations
    Seed(SeedCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
