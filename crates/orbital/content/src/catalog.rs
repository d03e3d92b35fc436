//! Statically built ordnance and satellite registry.

use std::collections::BTreeMap;

use orbital_core::{
    ImpactProfile, OrdnanceDefinition, OrdnanceKind, SatelliteDefinition, SatelliteKind,
};

/// Impact profile of the nuke.
pub const NUKE_PROFILE: ImpactProfile = ImpactProfile {
    explosion_radius: 40.0,
    damage: 10_000.0,
    knockback: 100.0,
    shake_intensity: 500.0,
    shake_duration: 50.0,
};

/// Impact profile of the precision bomb.
pub const PRECISION_BOMB_PROFILE: ImpactProfile = ImpactProfile {
    explosion_radius: 2.0,
    damage: 1000.0,
    knockback: 1.0,
    shake_intensity: 5.0,
    shake_duration: 10.0,
};

/// Registered ordnance and satellite definitions, keyed by kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    ordnance: BTreeMap<OrdnanceKind, OrdnanceDefinition>,
    satellites: BTreeMap<SatelliteKind, SatelliteDefinition>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The content shipped with the game.
    pub fn builtin() -> Self {
        Self::builder()
            .with_ordnance(OrdnanceDefinition::new(
                OrdnanceKind::Nuke,
                "Nuke",
                10.0,
                NUKE_PROFILE,
            ))
            .with_ordnance(OrdnanceDefinition::new(
                OrdnanceKind::PrecisionBomb,
                "Precision Bomb",
                1.5,
                PRECISION_BOMB_PROFILE,
            ))
            .with_satellite(SatelliteDefinition::new(
                SatelliteKind::Small,
                "Small Satellite",
                5.0,
            ))
            .with_satellite(SatelliteDefinition::new(
                SatelliteKind::Medium,
                "Medium Satellite",
                10.0,
            ))
            .with_satellite(SatelliteDefinition::new(
                SatelliteKind::Large,
                "Large Satellite",
                20.0,
            ))
            .build()
    }

    pub fn ordnance(&self, kind: OrdnanceKind) -> Option<&OrdnanceDefinition> {
        self.ordnance.get(&kind)
    }

    pub fn satellite(&self, kind: SatelliteKind) -> Option<&SatelliteDefinition> {
        self.satellites.get(&kind)
    }

    /// Ordnance definitions in identifier order.
    pub fn ordnance_definitions(&self) -> impl Iterator<Item = &OrdnanceDefinition> + '_ {
        self.ordnance.values()
    }

    pub fn satellite_definitions(&self) -> impl Iterator<Item = &SatelliteDefinition> + '_ {
        self.satellites.values()
    }

    pub fn is_empty(&self) -> bool {
        self.ordnance.is_empty() && self.satellites.is_empty()
    }
}

/// Assembles a [`Catalog`]; a later definition of the same kind replaces the
/// earlier one.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn with_ordnance(mut self, definition: OrdnanceDefinition) -> Self {
        self.catalog.ordnance.insert(definition.kind, definition);
        self
    }

    pub fn with_satellite(mut self, definition: SatelliteDefinition) -> Self {
        self.catalog.satellites.insert(definition.kind, definition);
        self
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}
