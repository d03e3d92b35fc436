//! [`orbital_core::CatalogOracle`] backed by a static content catalog.
use orbital_content::Catalog;
use orbital_core::{
    CatalogOracle, OrdnanceDefinition, OrdnanceKind, SatelliteDefinition, SatelliteKind,
};

/// CatalogOracle implementation over a fixed [`Catalog`].
pub struct CatalogOracleImpl {
    catalog: Catalog,
}

impl CatalogOracleImpl {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Oracle over the content shipped with the game.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CatalogOracleImpl {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogOracle for CatalogOracleImpl {
    fn resolve_item(&self, id: &str) -> Option<OrdnanceDefinition> {
        OrdnanceKind::from_id(id).and_then(|kind| self.catalog.ordnance(kind).cloned())
    }

    fn satellite(&self, id: &str) -> Option<SatelliteDefinition> {
        SatelliteKind::from_id(id).and_then(|kind| self.catalog.satellite(kind).cloned())
    }

    fn all_ordnance(&self) -> Vec<OrdnanceDefinition> {
        self.catalog.ordnance_definitions().cloned().collect()
    }
}
