//! Catalog loader.

use std::path::Path;

use orbital_core::{
    ImpactProfile, OrdnanceDefinition, OrdnanceKind, SatelliteDefinition, SatelliteKind,
};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::loaders::{LoadResult, read_file};

/// Ordnance entry as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdnanceEntry {
    pub id: String,
    pub name: String,
    pub volume: f32,
    pub profile: ImpactProfile,
}

/// Satellite entry as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatelliteEntry {
    pub id: String,
    pub name: String,
    pub capacity: f32,
}

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub ordnance: Vec<OrdnanceEntry>,
    #[serde(default)]
    pub satellites: Vec<SatelliteEntry>,
}

/// Loader for the ordnance catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    ///
    /// Identifiers must name one of the fixed ordnance or satellite kinds;
    /// the file only tunes their parameters.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse catalog RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        let mut builder = Catalog::builder();
        for entry in file.ordnance {
            let kind = OrdnanceKind::from_id(&entry.id)
                .ok_or_else(|| anyhow::anyhow!("Unknown ordnance id '{}'", entry.id))?;
            builder = builder.with_ordnance(OrdnanceDefinition::new(
                kind,
                entry.name,
                entry.volume,
                entry.profile,
            ));
        }
        for entry in file.satellites {
            let kind = SatelliteKind::from_id(&entry.id)
                .ok_or_else(|| anyhow::anyhow!("Unknown satellite id '{}'", entry.id))?;
            builder = builder.with_satellite(SatelliteDefinition::new(
                kind,
                entry.name,
                entry.capacity,
            ));
        }

        Ok(builder.build())
    }
}
