//! Deposit ordnance at the current location.

use anyhow::Result;
use clap::Parser;
use console::style;
use client_bootstrap::OrbitalConfig;

use super::open_session;

/// Deposit ordnance at the current location
#[derive(Parser)]
pub struct Deposit {
    /// Ordnance identifier (e.g., nuke, precision-bomb)
    #[arg(value_name = "ORDNANCE")]
    ordnance: String,

    /// Units to deposit
    #[arg(short, long, default_value_t = 1)]
    amount: u32,
}

impl Deposit {
    pub fn execute(self, config: OrbitalConfig) -> Result<()> {
        let mut setup = open_session(config)?;
        let location = setup.session.current_location();

        setup.session.deposit(&self.ordnance, self.amount)?;
        let saved = setup.session.shutdown()?;
        let quantity = saved.quantity_of(location.kind, location.key.as_str(), &self.ordnance);

        println!(
            "{} {} x{} over {} (now {})",
            style("Deposited").green().bold(),
            self.ordnance,
            self.amount,
            location,
            style(quantity).yellow()
        );
        Ok(())
    }
}
