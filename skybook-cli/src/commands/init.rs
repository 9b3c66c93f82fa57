//! Init command implementation.
//!
//! This module implements the `init` command for explicitly creating the
//! reservation store file and its table.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Parser;

/// Create the reservation store.
#[derive(Parser)]
#[command(about = "Create the reservation store and its table")]
pub struct InitCommand {
    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// Running it against an existing store leaves the stored data untouched.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db_path = config.database_path();

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            if db_path.exists() {
                println!("Store already exists: {}", db_path.display());
            } else {
                println!("Would create store: {}", db_path.display());
            }
            return Ok(());
        }

        let existed = db_path.exists();
        let store = open_store(&config)?;
        let count = store.count()?;
        store.shutdown()?;

        if existed {
            println!(
                "Store ready at {} ({count} reservation(s))",
                db_path.display()
            );
        } else {
            println!("Created store at {}", db_path.display());
        }

        Ok(())
    }
}
