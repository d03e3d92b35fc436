//! Helpers for constructing the oracles consumed by a session.
use std::sync::Arc;

use anyhow::{Context, Result};
use orbital_content::{Catalog, CatalogLoader};
use orbital_core::LocationKey;
use orbital_runtime::{
    CatalogOracleImpl, OracleManager, SaveDirLocations, SaveFileCurrentLocation,
};

use crate::config::OrbitalConfig;

pub trait OracleFactory: Send + Sync {
    fn build(&self) -> Result<OracleManager>;
}

/// Oracle factory backed by content data and the host's save directory.
///
/// The catalog comes from the configured RON file when one is set, from the
/// built-in content otherwise.
#[derive(Clone, Debug)]
pub struct ContentOracleFactory {
    config: OrbitalConfig,
}

impl ContentOracleFactory {
    pub fn new(config: OrbitalConfig) -> Self {
        Self { config }
    }

    fn catalog(&self) -> Result<Catalog> {
        match &self.config.catalog_path {
            Some(path) => {
                let catalog = CatalogLoader::load(path)
                    .with_context(|| format!("Failed to load catalog {}", path.display()))?;
                tracing::info!("Loaded catalog from {}", path.display());
                Ok(catalog)
            }
            None => Ok(Catalog::builtin()),
        }
    }
}

impl OracleFactory for ContentOracleFactory {
    fn build(&self) -> Result<OracleManager> {
        let catalog = CatalogOracleImpl::new(self.catalog()?);

        let save_dir = self.config.resolved_save_dir();
        tracing::debug!("Scanning saves in {}", save_dir.display());
        let locations = SaveDirLocations::new(save_dir, self.config.planets.iter().cloned());

        let current = SaveFileCurrentLocation::new(
            self.config.current_planet.clone().map(LocationKey::from),
            self.config.current_save.clone().unwrap_or_default(),
        );

        Ok(OracleManager::new(
            Arc::new(catalog),
            Arc::new(locations),
            Arc::new(current),
        ))
    }
}
