//! Inspect the inventory document exactly as it is stored.
//!
//! Unlike the other commands this does not reconcile, so stale locations and
//! unknown items still show up.

use anyhow::Result;
use clap::Parser;
use console::style;
use client_bootstrap::OrbitalConfig;
use orbital_runtime::{FileInventoryRepository, InventoryRepository};

use super::print_store;

/// Inspect the inventory document as stored, without reconciling
#[derive(Parser)]
pub struct Inspect;

impl Inspect {
    pub fn execute(self, config: OrbitalConfig) -> Result<()> {
        let repository = FileInventoryRepository::new(config.storage_path());
        println!("{} {}", style("Document:").bold(), repository.describe());

        match repository.load()? {
            Some(store) => {
                println!();
                print_store(&store);
            }
            None => println!("{}", style("No inventory document yet").dim()),
        }
        Ok(())
    }
}
