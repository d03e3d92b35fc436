//! Launch a satellite payload over the current location.

use anyhow::Result;
use clap::Parser;
use console::style;
use client_bootstrap::OrbitalConfig;
use orbital_core::LaunchManifest;

use super::open_session;

/// Launch a satellite payload over the current location
#[derive(Parser)]
pub struct Launch {
    /// Satellite hull identifier (e.g., small-satellite)
    #[arg(short, long, value_name = "SATELLITE")]
    satellite: String,

    /// Ordnance to load, one identifier per unit
    #[arg(value_name = "ORDNANCE", required = true)]
    payload: Vec<String>,
}

impl Launch {
    pub fn execute(self, config: OrbitalConfig) -> Result<()> {
        let mut setup = open_session(config)?;
        let catalog = setup.session.oracles().catalog();

        let mut manifest = LaunchManifest::new();
        manifest.load_satellite_id(catalog, &self.satellite)?;
        for ordnance in &self.payload {
            manifest.load_ordnance_id(catalog, ordnance)?;
        }

        let volume = manifest.payload_volume();
        let remaining = manifest.remaining_capacity();
        let location = setup.session.current_location();
        let deposited = setup.session.launch(&mut manifest)?;
        setup.session.shutdown()?;

        println!(
            "{} {} over {} ({:.1} used, {:.1} free)",
            style("Launched").green().bold(),
            self.satellite,
            location,
            volume,
            remaining
        );
        for (kind, count) in deposited {
            println!("  {:<20} {}", kind.id(), style(count).yellow());
        }
        Ok(())
    }
}
