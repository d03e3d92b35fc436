//! Impact descriptions handed to the host once ordnance lands.
//!
//! Damage, knockback and visual effects are applied by the host; this module
//! only converts an ordnance profile and a target tile into world-space
//! parameters.

use crate::env::{ImpactProfile, OrdnanceKind};

/// World units per tile.
pub const TILE_SIZE: f32 = 8.0;

/// Target tile of a strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpactSite {
    pub tile_x: i32,
    pub tile_y: i32,
}

impl ImpactSite {
    pub const fn new(tile_x: i32, tile_y: i32) -> Self {
        Self { tile_x, tile_y }
    }

    /// Centre of the tile in world coordinates.
    pub fn world_position(&self) -> (f32, f32) {
        (self.tile_x as f32 * TILE_SIZE, self.tile_y as f32 * TILE_SIZE)
    }
}

/// Fully resolved effect of one impact.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpactEffect {
    pub ordnance: OrdnanceKind,
    pub site: ImpactSite,
    pub world_x: f32,
    pub world_y: f32,
    /// Blast radius in tiles, used for building damage.
    pub tile_radius: f32,
    /// Blast radius in world units, used for unit damage and knockback.
    pub world_radius: f32,
    pub damage: f32,
    pub knockback: f32,
    pub shake_intensity: f32,
    pub shake_duration: f32,
}

impl ImpactEffect {
    pub fn new(ordnance: OrdnanceKind, site: ImpactSite, profile: &ImpactProfile) -> Self {
        let (world_x, world_y) = site.world_position();
        Self {
            ordnance,
            site,
            world_x,
            world_y,
            tile_radius: profile.explosion_radius,
            world_radius: profile.explosion_radius * TILE_SIZE,
            damage: profile.damage,
            knockback: profile.knockback,
            shake_intensity: profile.shake_intensity,
            shake_duration: profile.shake_duration,
        }
    }

    /// Knockback velocity for a unit at `distance` world units from the
    /// centre, scaled down by the unit's hit size.
    ///
    /// Falls off linearly to zero at the blast edge.
    pub fn knockback_at(&self, distance: f32, hit_size: f32) -> f32 {
        if distance >= self.world_radius || hit_size <= 0.0 {
            return 0.0;
        }
        self.knockback * (1.0 - distance / self.world_radius) / hit_size
    }
}
