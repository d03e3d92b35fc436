//! Command implementations for the `orbital` binary
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod deposit;
mod inspect;
mod launch;
mod show;
mod strike;

pub use deposit::Deposit;
pub use inspect::Inspect;
pub use launch::Launch;
pub use show::Show;
pub use strike::Strike;

use anyhow::Result;
use client_bootstrap::{OrbitalConfig, SessionBuilder, SessionSetup};
use console::style;
use orbital_core::{InventoryStore, LocationKind};

/// Opens a reconciled session for `config`.
fn open_session(config: OrbitalConfig) -> Result<SessionSetup> {
    let setup = SessionBuilder::new(config).build()?;
    tracing::debug!("Session opened ({})", setup.session.state());
    Ok(setup)
}

/// Prints every tracked location with its holdings.
fn print_store(store: &InventoryStore) {
    for kind in [LocationKind::Planet, LocationKind::Sector] {
        let records = store.records(kind);
        println!(
            "{} ({})",
            style(format!("{kind}s")).bold().cyan(),
            records.len()
        );

        if records.is_empty() {
            println!("  {}", style("none").dim());
            continue;
        }

        for (key, record) in records {
            println!(
                "  {} {}",
                style(key).bold(),
                style(format!("[{} units]", record.total_quantity())).dim()
            );
            for (item, quantity) in record.iter() {
                println!("    {:<20} {}", item, style(quantity).yellow());
            }
        }
    }
}
