//! Repository contract for persisting the inventory store.

use orbital_core::InventoryStore;

use crate::repository::Result;

/// Repository for the inventory store.
///
/// There is a single document per data directory; saves replace it whole.
pub trait InventoryRepository: Send + Sync {
    /// Load the persisted store.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<InventoryStore>>;

    /// Persist the store, replacing any previous document.
    ///
    /// A failed save must leave the previous document intact.
    fn save(&self, store: &InventoryStore) -> Result<()>;

    /// Human-readable location of the document, used in log lines.
    fn describe(&self) -> String;

    /// Load the persisted store, falling back to an empty one on any failure.
    ///
    /// The caller is expected to reconcile the result before use.
    fn load_or_default(&self) -> InventoryStore {
        match self.load() {
            Ok(Some(store)) => {
                tracing::info!(
                    "Loaded inventory ({} locations) from {}",
                    store.location_count(),
                    self.describe()
                );
                store
            }
            Ok(None) => {
                tracing::info!("No inventory at {}, starting empty", self.describe());
                InventoryStore::new()
            }
            Err(err) => {
                tracing::warn!(
                    "Failed to load inventory from {}: {}. Starting empty",
                    self.describe(),
                    err
                );
                InventoryStore::new()
            }
        }
    }
}
