//! Event payloads published by the session and the impact scheduler.

use serde::{Deserialize, Serialize};

use orbital_core::{ImpactEffect, Location};

/// Ordnance landed; the host applies the effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEvent {
    /// Sequence number assigned when the impact was scheduled.
    pub sequence: u64,
    pub effect: ImpactEffect,
}

/// Inventory changes, for layers that display the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    /// Quantity of `item` at `location` is now `quantity`.
    Changed {
        location: Location,
        item: String,
        quantity: u32,
    },
    /// A reconciliation pass changed the store.
    Reconciled {
        added: usize,
        removed: usize,
        stripped: usize,
    },
    /// The store was written to its repository.
    Persisted { locations: usize },
}
