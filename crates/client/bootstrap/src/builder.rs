//! Builds the session, oracles, and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::Result;
use orbital_runtime::{
    EventBus, FileInventoryRepository, ImpactScheduler, InventoryRepository, OrbitalSession,
};

use crate::config::OrbitalConfig;
use crate::oracles::{ContentOracleFactory, OracleFactory};

/// Builder that assembles the session, its oracles, and configuration for clients.
pub struct SessionBuilder {
    config: OrbitalConfig,
    oracle_factory: Arc<dyn OracleFactory>,
    repository: Option<Arc<dyn InventoryRepository>>,
}

impl SessionBuilder {
    pub fn new(config: OrbitalConfig) -> Self {
        let default_factory = ContentOracleFactory::new(config.clone());
        Self {
            config,
            oracle_factory: Arc::new(default_factory),
            repository: None,
        }
    }

    /// Provide a custom oracle factory (e.g., fixed locations in tests).
    pub fn oracle_factory(mut self, factory: impl OracleFactory + 'static) -> Self {
        self.oracle_factory = Arc::new(factory);
        self
    }

    /// Provide a custom repository instead of the file below the data dir.
    pub fn repository(mut self, repository: Arc<dyn InventoryRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Opens the session: load, then reconcile.
    ///
    /// Strikes are enabled when called from inside a tokio runtime.
    pub fn build(self) -> Result<SessionSetup> {
        let oracles = self.oracle_factory.build()?;

        let repository = match self.repository {
            Some(repository) => repository,
            None => {
                let path = self.config.storage_path();
                tracing::debug!("Inventory document: {}", path.display());
                Arc::new(FileInventoryRepository::new(path))
            }
        };

        let events = EventBus::new();
        let mut session =
            OrbitalSession::open(repository, oracles, self.config.session_config())
                .with_events(events.clone());

        match ImpactScheduler::current(Arc::new(events.clone())) {
            Ok(scheduler) => session = session.with_impacts(scheduler),
            Err(err) => tracing::debug!("Strikes disabled: {}", err),
        }

        Ok(SessionSetup {
            config: self.config,
            events,
            session,
        })
    }
}

pub struct SessionSetup {
    pub config: OrbitalConfig,
    pub events: EventBus,
    pub session: OrbitalSession,
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbital_core::{ImpactSite, LocationKind};
    use orbital_runtime::{
        CatalogOracleImpl, FixedCurrentLocation, FixedLocations, InMemoryInventoryRepo,
        OracleManager, Topic,
    };
    use std::fs;
    use tempfile::TempDir;

    struct AlphaOracles;

    impl OracleFactory for AlphaOracles {
        fn build(&self) -> Result<OracleManager> {
            Ok(OracleManager::new(
                Arc::new(CatalogOracleImpl::builtin()),
                Arc::new(FixedLocations::planets(["Alpha"])),
                Arc::new(FixedCurrentLocation::planet("Alpha", 1)),
            ))
        }
    }

    #[test]
    fn test_builds_from_save_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = OrbitalConfig {
            data_dir: Some(temp_dir.path().to_path_buf()),
            current_planet: Some("serpulo".to_string()),
            current_save: Some("sector-serpulo-12.msav".to_string()),
            ..OrbitalConfig::default()
        };
        let saves = config.resolved_save_dir();
        fs::create_dir_all(&saves).unwrap();
        fs::write(saves.join("sector-serpulo-12.msav"), b"").unwrap();

        let mut setup = SessionBuilder::new(config.clone()).build().unwrap();
        setup.session.deposit("nuke", 2).unwrap();
        setup.session.shutdown().unwrap();

        assert!(config.storage_path().is_file());
        let reopened = SessionBuilder::new(config).build().unwrap();
        assert_eq!(
            reopened
                .session
                .store()
                .quantity_of(LocationKind::Planet, "serpulo", "nuke"),
            2
        );
    }

    #[test]
    fn test_missing_catalog_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = OrbitalConfig {
            data_dir: Some(temp_dir.path().to_path_buf()),
            catalog_path: Some(temp_dir.path().join("missing.ron")),
            ..OrbitalConfig::default()
        };

        assert!(SessionBuilder::new(config).build().is_err());
    }

    #[tokio::test]
    async fn test_strikes_enabled_inside_runtime() {
        let repo = InMemoryInventoryRepo::with_document(r#"{"planets": {"Alpha": {"nuke": 1}}}"#);
        let mut setup = SessionBuilder::new(OrbitalConfig::default())
            .oracle_factory(AlphaOracles)
            .repository(Arc::new(repo))
            .build()
            .unwrap();
        let mut impacts = setup.events.subscribe(Topic::Impact);

        setup
            .session
            .strike("nuke", ImpactSite::new(0, 0), Some(std::time::Duration::ZERO))
            .unwrap()
            .landed()
            .await
            .unwrap();

        assert!(impacts.recv().await.is_ok());
    }
}
