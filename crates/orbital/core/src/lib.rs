//! Orbital ordnance inventory: data model, mutation rules and reconciliation.
//!
//! `orbital-core` owns the [`InventoryStore`] and every rule that keeps it
//! consistent. It performs no I/O: the catalog, the set of existing locations
//! and the player's current location are supplied through the oracle traits in
//! [`env`], and persistence lives in the runtime crate.
pub mod env;
pub mod error;
pub mod impact;
pub mod launch;
pub mod reconcile;
pub mod state;

pub use env::{
    ActiveLocations, CatalogOracle, CurrentLocationOracle, ImpactProfile, LocationOracle,
    OrdnanceDefinition, OrdnanceKind, SatelliteDefinition, SatelliteKind,
};
pub use error::{ErrorSeverity, GameError};
pub use impact::{ImpactEffect, ImpactSite, TILE_SIZE};
pub use launch::{LaunchError, LaunchManifest};
pub use reconcile::{ReconcileReport, StrippedItem, reconcile};
pub use state::{
    InventoryError, InventoryRecord, InventoryStore, Location, LocationKey, LocationKind,
};
