//! Runtime implementations of the `orbital-core` oracle traits.
//!
//! These adapters expose static content and host state (save artifacts, the
//! save being played) through the traits the inventory logic consumes, and
//! are bundled into an [`OracleManager`] for the session. Dynamic inventory
//! state lives in repositories.
mod catalog;
mod current;
mod locations;

use std::sync::Arc;

use orbital_core::{CatalogOracle, CurrentLocationOracle, LocationOracle};

pub use catalog::CatalogOracleImpl;
pub use current::{FixedCurrentLocation, SaveFileCurrentLocation};
pub use locations::{FixedLocations, SAVE_EXTENSION, SaveDirLocations, SaveName};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) catalog: Arc<dyn CatalogOracle>,
    pub(crate) locations: Arc<dyn LocationOracle>,
    pub(crate) current: Arc<dyn CurrentLocationOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        catalog: Arc<dyn CatalogOracle>,
        locations: Arc<dyn LocationOracle>,
        current: Arc<dyn CurrentLocationOracle>,
    ) -> Self {
        Self {
            catalog,
            locations,
            current,
        }
    }

    pub fn catalog(&self) -> &dyn CatalogOracle {
        self.catalog.as_ref()
    }

    pub fn locations(&self) -> &dyn LocationOracle {
        self.locations.as_ref()
    }

    pub fn current(&self) -> &dyn CurrentLocationOracle {
        self.current.as_ref()
    }
}
