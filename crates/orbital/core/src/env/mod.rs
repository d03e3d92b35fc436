//! Traits describing the external collaborators of the inventory store.
//!
//! Oracles expose the item catalog, the set of locations that currently
//! exist, and where the player is. The store and the reconciliation pass only
//! see these traits, so tests can swap in fixed fakes.
mod catalog;
mod current;
mod locations;

pub use catalog::{
    CatalogOracle, ImpactProfile, OrdnanceDefinition, OrdnanceKind, SatelliteDefinition,
    SatelliteKind,
};
pub use current::CurrentLocationOracle;
pub use locations::{ActiveLocations, LocationOracle};
