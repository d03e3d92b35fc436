//! Show the reconciled inventory.

use anyhow::Result;
use clap::Parser;
use console::style;
use client_bootstrap::OrbitalConfig;
use orbital_runtime::repository::codec;

use super::{open_session, print_store};

/// Show the reconciled inventory
#[derive(Parser)]
pub struct Show {
    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Locations and their holdings
    Summary,
    /// The document as it would be persisted
    Json,
}

impl Show {
    pub fn execute(self, config: OrbitalConfig) -> Result<()> {
        let setup = open_session(config)?;
        let session = &setup.session;

        match self.format {
            OutputFormat::Summary => {
                let current = session.current_location();
                let tracked = session.current_record().is_some();
                println!(
                    "{} {}{}",
                    style("Current location:").bold(),
                    style(&current).green(),
                    if tracked {
                        String::new()
                    } else {
                        style(" (untracked)").red().to_string()
                    }
                );
                println!();
                print_store(session.store());
            }
            OutputFormat::Json => println!("{}", codec::encode(session.store())?),
        }

        setup.session.shutdown()?;
        Ok(())
    }
}
