//! Authoritative inventory state.
//!
//! This module owns the data structures that describe what is held in orbit
//! at each location. Runtime layers query this state but mutate it only
//! through the store's mutation API and the reconciliation pass.
mod error;
mod location;
mod record;
mod store;

pub use error::InventoryError;
pub use location::{Location, LocationKey, LocationKind};
pub use record::InventoryRecord;
pub use store::InventoryStore;
