//! Call in one unit of ordnance and wait for it to land.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use client_bootstrap::OrbitalConfig;
use orbital_core::ImpactSite;

use super::open_session;

/// Call in one unit of ordnance on a tile
#[derive(Parser)]
pub struct Strike {
    /// Ordnance identifier (e.g., nuke, precision-bomb)
    #[arg(value_name = "ORDNANCE")]
    ordnance: String,

    /// Target tile column
    #[arg(short, long, allow_hyphen_values = true)]
    x: i32,

    /// Target tile row
    #[arg(short, long, allow_hyphen_values = true)]
    y: i32,

    /// Delay before impact in milliseconds (defaults to ORBITAL_IMPACT_DELAY_MS)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,
}

impl Strike {
    pub async fn execute(self, config: OrbitalConfig) -> Result<()> {
        let mut setup = open_session(config)?;
        let site = ImpactSite::new(self.x, self.y);
        let delay = self.delay_ms.map(Duration::from_millis);

        let scheduled = setup.session.strike(&self.ordnance, site, delay)?;
        let remaining = setup
            .session
            .current_record()
            .map(|record| record.quantity_of(&self.ordnance))
            .unwrap_or(0);
        println!(
            "{} {} #{} on ({}, {}), {} left",
            style("Incoming").yellow().bold(),
            self.ordnance,
            scheduled.sequence(),
            self.x,
            self.y,
            remaining
        );

        // Persist the deduction before waiting on the impact.
        setup.session.save()?;

        let effect = scheduled.landed().await?;
        println!(
            "{} at ({:.0}, {:.0}) radius {:.0} damage {:.0}",
            style("Impact").red().bold(),
            effect.world_x,
            effect.world_y,
            effect.world_radius,
            effect.damage
        );

        setup.session.shutdown()?;
        Ok(())
    }
}
