//! Reconciliation of the inventory store with ground truth.
//!
//! # Algorithm
//!
//! 1. Snapshot the keys currently tracked in each namespace.
//! 2. Register every active location missing from the store with an empty record.
//! 3. Drop every snapshotted planet that is no longer active.
//! 4. Drop every snapshotted sector that is no longer active. When the
//!    enumerator reports no standalone sectors at all, every sector is stale.
//! 5. Strip item identifiers the catalog no longer resolves from the
//!    surviving records.
//!
//! Removals are evaluated against the snapshot from step 1, never against
//! keys inserted in step 2. The pass keeps no state and is idempotent: a
//! second run with unchanged inputs reports nothing.

use crate::env::{ActiveLocations, CatalogOracle};
use crate::state::{InventoryRecord, InventoryStore, Location, LocationKey, LocationKind};
use strum::IntoEnumIterator;

/// Item identifier removed from a record because the catalog rejected it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrippedItem {
    pub location: Location,
    pub item: String,
    pub quantity: u32,
}

/// What a reconciliation pass changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: Vec<Location>,
    pub removed: Vec<Location>,
    pub stripped: Vec<StrippedItem>,
}

impl ReconcileReport {
    /// True when the pass found the store already consistent.
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.stripped.is_empty()
    }
}

/// Aligns `store` with the active-location set and the catalog, in place.
pub fn reconcile(
    store: &mut InventoryStore,
    active: &ActiveLocations,
    catalog: &dyn CatalogOracle,
) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    for kind in LocationKind::iter() {
        let tracked: Vec<LocationKey> = store.keys(kind).cloned().collect();

        register_missing(store, active, kind, &mut report);
        drop_inactive(store, active, kind, tracked, &mut report);
    }

    strip_unknown_items(store, catalog, &mut report);

    if report.is_clean() {
        tracing::debug!(
            "Inventory already consistent ({} locations)",
            store.location_count()
        );
    } else {
        tracing::info!(
            "Reconciled inventory: {} added, {} removed, {} items stripped",
            report.added.len(),
            report.removed.len(),
            report.stripped.len()
        );
    }

    report
}

fn register_missing(
    store: &mut InventoryStore,
    active: &ActiveLocations,
    kind: LocationKind,
    report: &mut ReconcileReport,
) {
    let records = store.mapping_mut(kind);
    for key in active.keys(kind) {
        if records.contains_key(&key) {
            continue;
        }
        tracing::info!("Adding untracked {} {} to inventory", kind, key);
        records.insert(key.clone(), InventoryRecord::new());
        report.added.push(Location::new(kind, key));
    }
}

fn drop_inactive(
    store: &mut InventoryStore,
    active: &ActiveLocations,
    kind: LocationKind,
    tracked: Vec<LocationKey>,
    report: &mut ReconcileReport,
) {
    let no_sectors = kind == LocationKind::Sector && active.standalone_sectors().is_none();
    let records = store.mapping_mut(kind);

    for key in tracked {
        if active.contains(kind, &key) {
            continue;
        }
        if no_sectors {
            tracing::info!("Removing sector {} from inventory: no standalone sectors exist", key);
        } else {
            tracing::info!("Removing stale {} {} from inventory", kind, key);
        }
        records.remove(&key);
        report.removed.push(Location::new(kind, key));
    }
}

fn strip_unknown_items(
    store: &mut InventoryStore,
    catalog: &dyn CatalogOracle,
    report: &mut ReconcileReport,
) {
    for kind in LocationKind::iter() {
        for (key, record) in store.mapping_mut(kind).iter_mut() {
            for (item, quantity) in record.retain_items(|item| catalog.is_registered(item)) {
                tracing::info!(
                    "Removing unknown item '{}' x{} from {} {}",
                    item,
                    quantity,
                    kind,
                    key
                );
                report.stripped.push(StrippedItem {
                    location: Location::new(kind, key.clone()),
                    item,
                    quantity,
                });
            }
        }
    }
}
