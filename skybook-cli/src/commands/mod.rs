//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the store file and its table
//! - `book`: Book a new reservation
//! - `list`: List all reservations, newest first
//! - `show`: Show a single reservation
//! - `edit`: Change fields of an existing reservation
//! - `cancel`: Delete a reservation
//! - `seed`: Add the bundled demo reservations
//! - `completions`: Generate shell completion scripts

pub mod book;
pub mod cancel;
pub mod completions;
pub mod edit;
pub mod init;
pub mod list;
pub mod seed;
pub mod show;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use edit::EditCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use seed::SeedCommand;
pub use show::ShowCommand;
