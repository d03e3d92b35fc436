use std::str::FromStr;

use crate::impact::{ImpactEffect, ImpactSite};

/// Resolves ordnance and satellite identifiers against the registered content.
///
/// The catalog is fixed at startup; identifiers it does not resolve are
/// stale and get stripped from persisted inventory by reconciliation.
pub trait CatalogOracle: Send + Sync {
    /// Ordnance registered under `id`, `None` if unknown.
    fn resolve_item(&self, id: &str) -> Option<OrdnanceDefinition>;

    /// Satellite registered under `id`, `None` if unknown.
    fn satellite(&self, id: &str) -> Option<SatelliteDefinition>;

    /// All registered ordnance, ordered by identifier.
    fn all_ordnance(&self) -> Vec<OrdnanceDefinition>;

    fn is_registered(&self, id: &str) -> bool {
        self.resolve_item(id).is_some()
    }
}

/// Closed set of ordnance types, dispatched by identifier.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrdnanceKind {
    #[strum(serialize = "nuke")]
    #[cfg_attr(feature = "serde", serde(rename = "nuke"))]
    Nuke,
    #[strum(serialize = "precision-bomb")]
    #[cfg_attr(feature = "serde", serde(rename = "precision-bomb"))]
    PrecisionBomb,
}

impl OrdnanceKind {
    /// Stable identifier used as the item key in inventory records.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Parses an identifier; `None` if it names no ordnance type.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::from_str(id).ok()
    }
}

/// Closed set of satellite hulls that carry ordnance into orbit.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SatelliteKind {
    #[strum(serialize = "small-satellite")]
    #[cfg_attr(feature = "serde", serde(rename = "small-satellite"))]
    Small,
    #[strum(serialize = "medium-satellite")]
    #[cfg_attr(feature = "serde", serde(rename = "medium-satellite"))]
    Medium,
    #[strum(serialize = "large-satellite")]
    #[cfg_attr(feature = "serde", serde(rename = "large-satellite"))]
    Large,
}

impl SatelliteKind {
    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::from_str(id).ok()
    }
}

/// Blast parameters of one ordnance type.
///
/// Radius is in tiles; the remaining values are passed through to the host's
/// damage and camera-shake systems unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpactProfile {
    pub explosion_radius: f32,
    pub damage: f32,
    pub knockback: f32,
    pub shake_intensity: f32,
    pub shake_duration: f32,
}

/// Registered ordnance type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrdnanceDefinition {
    pub kind: OrdnanceKind,
    pub name: String,
    /// Payload volume taken up inside a satellite.
    pub volume: f32,
    pub profile: ImpactProfile,
}

impl OrdnanceDefinition {
    pub fn new(
        kind: OrdnanceKind,
        name: impl Into<String>,
        volume: f32,
        profile: ImpactProfile,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            volume,
            profile,
        }
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    /// Describes the effect of this ordnance landing on `site`.
    pub fn impact(&self, site: ImpactSite) -> ImpactEffect {
        ImpactEffect::new(self.kind, site, &self.profile)
    }
}

/// Registered satellite hull.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SatelliteDefinition {
    pub kind: SatelliteKind,
    pub name: String,
    /// Total ordnance volume the hull can carry.
    pub capacity: f32,
}

impl SatelliteDefinition {
    pub fn new(kind: SatelliteKind, name: impl Into<String>, capacity: f32) -> Self {
        Self {
            kind,
            name: name.into(),
            capacity,
        }
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }
}
