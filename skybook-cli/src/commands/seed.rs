//! Seed command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use skybook::seed_demo_data;

/// Add the bundled demo reservations.
#[derive(Args)]
pub struct SeedCommand {}

impl SeedCommand {
    /// Execute the seed command.
    ///
    /// Prints the new ids, one per line.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(&config)?;

        let ids = seed_demo_data(&store)?;
        store.shutdown()?;

        if !global.quiet {
            eprintln!("Added {} demo reservation(s)", ids.len());
        }
        for id in ids {
            println!("{id}");
        }

        Ok(())
    }
}
