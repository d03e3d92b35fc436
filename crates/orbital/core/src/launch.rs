//! Launch manifests: a satellite hull and the ordnance packed into it.
//!
//! Launching a manifest deposits its ordnance into the inventory of the
//! current location; see the session layer for the deposit itself.

use std::collections::BTreeMap;

use crate::env::{CatalogOracle, OrdnanceDefinition, OrdnanceKind, SatelliteDefinition};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while packing a manifest.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LaunchError {
    #[error("no satellite loaded")]
    NoSatellite,

    #[error("payload volume {requested} exceeds remaining capacity {remaining} of {satellite}")]
    VolumeExceeded {
        satellite: String,
        requested: f32,
        remaining: f32,
    },

    #[error("'{id}' is not a registered ordnance")]
    UnknownOrdnance { id: String },

    #[error("'{id}' is not a registered satellite")]
    UnknownSatellite { id: String },
}

impl GameError for LaunchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            LaunchError::NoSatellite | LaunchError::VolumeExceeded { .. } => {
                ErrorSeverity::Recoverable
            }
            LaunchError::UnknownOrdnance { .. } | LaunchError::UnknownSatellite { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            LaunchError::NoSatellite => "LAUNCH_NO_SATELLITE",
            LaunchError::VolumeExceeded { .. } => "LAUNCH_VOLUME_EXCEEDED",
            LaunchError::UnknownOrdnance { .. } => "LAUNCH_UNKNOWN_ORDNANCE",
            LaunchError::UnknownSatellite { .. } => "LAUNCH_UNKNOWN_SATELLITE",
        }
    }
}

/// Satellite plus payload waiting on a launch pad.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LaunchManifest {
    satellite: Option<SatelliteDefinition>,
    payload: Vec<OrdnanceDefinition>,
}

impl LaunchManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a satellite on the pad.
    ///
    /// Replacing a hull keeps the payload only if it still fits; otherwise
    /// the manifest is left unchanged.
    pub fn load_satellite(&mut self, satellite: SatelliteDefinition) -> Result<(), LaunchError> {
        let used = self.payload_volume();
        if used > satellite.capacity {
            return Err(LaunchError::VolumeExceeded {
                satellite: satellite.name,
                requested: used,
                remaining: satellite.capacity,
            });
        }
        self.satellite = Some(satellite);
        Ok(())
    }

    /// Packs one unit of ordnance into the loaded satellite.
    pub fn load_ordnance(&mut self, ordnance: OrdnanceDefinition) -> Result<(), LaunchError> {
        let satellite = self.satellite.as_ref().ok_or(LaunchError::NoSatellite)?;
        let remaining = satellite.capacity - self.payload_volume();
        if ordnance.volume > remaining {
            return Err(LaunchError::VolumeExceeded {
                satellite: satellite.name.clone(),
                requested: ordnance.volume,
                remaining,
            });
        }
        self.payload.push(ordnance);
        Ok(())
    }

    /// Resolves `id` against the catalog and loads the satellite it names.
    pub fn load_satellite_id(
        &mut self,
        catalog: &dyn CatalogOracle,
        id: &str,
    ) -> Result<(), LaunchError> {
        let satellite = catalog
            .satellite(id)
            .ok_or_else(|| LaunchError::UnknownSatellite { id: id.to_owned() })?;
        self.load_satellite(satellite)
    }

    /// Resolves `id` against the catalog and packs one unit of it.
    pub fn load_ordnance_id(
        &mut self,
        catalog: &dyn CatalogOracle,
        id: &str,
    ) -> Result<(), LaunchError> {
        let ordnance = catalog
            .resolve_item(id)
            .ok_or_else(|| LaunchError::UnknownOrdnance { id: id.to_owned() })?;
        self.load_ordnance(ordnance)
    }

    pub fn satellite(&self) -> Option<&SatelliteDefinition> {
        self.satellite.as_ref()
    }

    pub fn payload(&self) -> &[OrdnanceDefinition] {
        &self.payload
    }

    pub fn payload_volume(&self) -> f32 {
        self.payload.iter().map(|ordnance| ordnance.volume).sum()
    }

    /// Capacity left in the loaded satellite, `0` without one.
    pub fn remaining_capacity(&self) -> f32 {
        self.satellite
            .as_ref()
            .map_or(0.0, |satellite| satellite.capacity - self.payload_volume())
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Payload unit counts per ordnance kind.
    pub fn grouped(&self) -> BTreeMap<OrdnanceKind, u32> {
        let mut counts = BTreeMap::new();
        for ordnance in &self.payload {
            *counts.entry(ordnance.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Empties the pad: the satellite and its payload leave together.
    pub fn clear(&mut self) {
        self.satellite = None;
        self.payload.clear();
    }
}
