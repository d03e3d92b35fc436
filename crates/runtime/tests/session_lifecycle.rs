//! Session lifecycle tests: load, reconcile, mutate, persist.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use orbital_core::{
    ActiveLocations, ImpactSite, InventoryError, LaunchManifest, Location, LocationKind,
    OrdnanceKind,
};
use orbital_runtime::{
    CatalogOracleImpl, Event, EventBus, FileInventoryRepository, FixedCurrentLocation,
    FixedLocations, ImpactScheduler, InMemoryInventoryRepo, InventoryRepository, OracleManager,
    OrbitalSession, RuntimeError, SaveDirLocations, SessionConfig, StoreState, Topic,
};
use tempfile::TempDir;

fn oracles(active: ActiveLocations, current: FixedCurrentLocation) -> OracleManager {
    OracleManager::new(
        Arc::new(CatalogOracleImpl::builtin()),
        Arc::new(FixedLocations::new(active)),
        Arc::new(current),
    )
}

fn alpha_session(repo: Arc<dyn InventoryRepository>) -> OrbitalSession {
    OrbitalSession::open(
        repo,
        oracles(
            ActiveLocations::new().with_planet("Alpha"),
            FixedCurrentLocation::planet("Alpha", 1),
        ),
        SessionConfig::default(),
    )
}

#[test]
fn test_add_then_remove_through_current_location() {
    let mut session = alpha_session(Arc::new(InMemoryInventoryRepo::new()));
    assert_eq!(session.state(), StoreState::Reconciled);

    session.deposit("nuke", 3).unwrap();
    assert_eq!(
        session.store().quantity_of(LocationKind::Planet, "Alpha", "nuke"),
        3
    );
    assert_eq!(session.state(), StoreState::Mutated);

    assert_eq!(session.withdraw("nuke", 2).unwrap(), 1);

    let err = session.withdraw("nuke", 5).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Inventory(InventoryError::InsufficientQuantity { available: 1, .. })
    ));
    assert_eq!(
        session.store().quantity_of(LocationKind::Planet, "Alpha", "nuke"),
        1
    );
}

#[test]
fn test_corrupt_file_is_rebuilt_by_reconciliation() {
    let temp_dir = TempDir::new().unwrap();
    let repo = FileInventoryRepository::in_data_dir(temp_dir.path());
    fs::create_dir_all(repo.path().parent().unwrap()).unwrap();
    fs::write(repo.path(), "planets: {{{ not json").unwrap();

    let session = OrbitalSession::open(
        Arc::new(repo),
        oracles(
            ActiveLocations::new().with_planet("Alpha").with_sector(7),
            FixedCurrentLocation::sector(7),
        ),
        SessionConfig::default(),
    );

    let store = session.store();
    assert_eq!(store.location_count(), 2);
    assert!(store.get_record(LocationKind::Planet, "Alpha").unwrap().is_empty());
    assert!(store.get_record(LocationKind::Sector, "7").unwrap().is_empty());
}

#[test]
fn test_persisted_quantities_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let repo: Arc<dyn InventoryRepository> =
        Arc::new(FileInventoryRepository::in_data_dir(temp_dir.path()));

    let mut session = alpha_session(Arc::clone(&repo));
    session.deposit("nuke", 2).unwrap();
    session.deposit("precision-bomb", 5).unwrap();
    let written = session.shutdown().unwrap();

    let reopened = alpha_session(repo);
    assert_eq!(reopened.store(), &written);
    assert_eq!(
        reopened
            .store()
            .quantity_of(LocationKind::Planet, "Alpha", "precision-bomb"),
        5
    );
}

#[test]
fn test_open_strips_unknown_items_and_stale_locations() {
    let repo = InMemoryInventoryRepo::with_document(
        r#"{
            "planets": {
                "Alpha": {"nuke": 2, "ghost-item": 1},
                "Beta": {"nuke": 9}
            },
            "sectors": {"3": ["nuke"]},
            "version": 2
        }"#,
    );

    let session = alpha_session(Arc::new(repo));
    let store = session.store();

    let planets: Vec<_> = store.keys(LocationKind::Planet).collect();
    assert_eq!(planets.len(), 1);
    assert_eq!(store.quantity_of(LocationKind::Planet, "Alpha", "nuke"), 2);
    assert_eq!(store.quantity_of(LocationKind::Planet, "Alpha", "ghost-item"), 0);
    // No standalone sectors exist, so every sector record is stale.
    assert!(store.records(LocationKind::Sector).is_empty());
}

#[test]
fn test_save_reconciles_against_current_saves() {
    let temp_dir = TempDir::new().unwrap();
    let saves = temp_dir.path().join("saves");
    fs::create_dir_all(&saves).unwrap();
    touch(&saves, "sector-serpulo-12.msav");
    touch(&saves, "sector-erekir-3.msav");

    let repo = Arc::new(InMemoryInventoryRepo::new());
    let mut session = OrbitalSession::open(
        repo.clone(),
        OracleManager::new(
            Arc::new(CatalogOracleImpl::builtin()),
            Arc::new(SaveDirLocations::new(&saves, ["serpulo", "erekir"])),
            Arc::new(FixedCurrentLocation::planet("erekir", 3)),
        ),
        SessionConfig::default(),
    );
    session.deposit("nuke", 1).unwrap();

    fs::remove_file(saves.join("sector-erekir-3.msav")).unwrap();
    session.on_game_saved().unwrap();
    assert_eq!(session.state(), StoreState::Persisted);

    let saved = repo.load().unwrap().unwrap();
    let planets: Vec<_> = saved
        .keys(LocationKind::Planet)
        .map(|key| key.as_str().to_string())
        .collect();
    assert_eq!(planets, vec!["serpulo".to_string()]);
}

#[test]
fn test_untracked_current_location_is_refused() {
    let mut session = OrbitalSession::open(
        Arc::new(InMemoryInventoryRepo::new()),
        oracles(
            ActiveLocations::new().with_planet("Alpha"),
            FixedCurrentLocation::sector(99),
        ),
        SessionConfig::default(),
    );

    let err = session.deposit("nuke", 1).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Inventory(InventoryError::UnknownLocation { .. })
    ));
    assert!(!session.store().contains(LocationKind::Sector, "99"));
}

#[test]
fn test_launch_deposits_payload_grouped_by_kind() {
    let mut session = alpha_session(Arc::new(InMemoryInventoryRepo::new()));
    let catalog = CatalogOracleImpl::builtin();

    let mut manifest = LaunchManifest::new();
    manifest.load_satellite_id(&catalog, "large-satellite").unwrap();
    manifest.load_ordnance_id(&catalog, "nuke").unwrap();
    manifest.load_ordnance_id(&catalog, "precision-bomb").unwrap();
    manifest.load_ordnance_id(&catalog, "precision-bomb").unwrap();

    let deposited = session.launch(&mut manifest).unwrap();

    assert_eq!(deposited.get(&OrdnanceKind::PrecisionBomb), Some(&2));
    assert!(manifest.is_empty());
    let record = session.current_record().unwrap();
    assert_eq!(record.quantity_of("nuke"), 1);
    assert_eq!(record.quantity_of("precision-bomb"), 2);
}

#[test]
fn test_launch_over_untracked_location_keeps_manifest() {
    let mut session = OrbitalSession::open(
        Arc::new(InMemoryInventoryRepo::new()),
        oracles(ActiveLocations::new(), FixedCurrentLocation::planet("Alpha", 1)),
        SessionConfig::default(),
    );
    let catalog = CatalogOracleImpl::builtin();
    let mut manifest = LaunchManifest::new();
    manifest.load_satellite_id(&catalog, "small-satellite").unwrap();
    manifest.load_ordnance_id(&catalog, "precision-bomb").unwrap();

    assert!(session.launch(&mut manifest).is_err());
    assert_eq!(manifest.payload().len(), 1);

    let mut empty = LaunchManifest::new();
    assert!(session.launch(&mut empty).unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_strike_deducts_before_impact() {
    let bus = EventBus::new();
    let mut impacts = bus.subscribe(Topic::Impact);
    let scheduler = ImpactScheduler::current(Arc::new(bus.clone())).unwrap();

    let mut session = alpha_session(Arc::new(InMemoryInventoryRepo::new())).with_impacts(scheduler);
    session.deposit("precision-bomb", 1).unwrap();

    let scheduled = session
        .strike("precision-bomb", ImpactSite::new(5, 5), Some(Duration::from_secs(3)))
        .unwrap();
    assert_eq!(session.withdraw("precision-bomb", 1).ok(), None);
    assert!(impacts.try_recv().is_err());

    let effect = scheduled.landed().await.unwrap();
    assert_eq!(effect.ordnance, OrdnanceKind::PrecisionBomb);
    assert!(matches!(impacts.recv().await.unwrap(), Event::Impact(_)));

    // Nothing left to deduct, so nothing is scheduled.
    let err = session
        .strike("precision-bomb", ImpactSite::new(5, 5), None)
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Inventory(InventoryError::InsufficientQuantity { .. })
    ));
}

#[test]
fn test_strike_without_scheduler_deducts_nothing() {
    let mut session = alpha_session(Arc::new(InMemoryInventoryRepo::new()));
    session.deposit("nuke", 1).unwrap();

    let err = session
        .strike("nuke", ImpactSite::new(0, 0), None)
        .unwrap_err();
    assert!(matches!(err, RuntimeError::NoTimerRuntime));
    assert_eq!(session.current_record().unwrap().quantity_of("nuke"), 1);

    let err = session
        .strike("ghost-item", ImpactSite::new(0, 0), None)
        .unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownOrdnance { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_call_uses_selection_and_refreshes_it() {
    let scheduler = ImpactScheduler::current(Arc::new(EventBus::new())).unwrap();
    let mut session = alpha_session(Arc::new(InMemoryInventoryRepo::new())).with_impacts(scheduler);
    session.deposit("nuke", 1).unwrap();
    session.deposit("precision-bomb", 2).unwrap();

    let mut selection = session.strike_selection();
    assert_eq!(selection.len(), 3);
    selection.select(2).unwrap();

    let scheduled = session
        .call(&mut selection, ImpactSite::new(1, 2), Some(Duration::from_millis(100)))
        .unwrap();
    assert_eq!(selection.len(), 2);
    assert_eq!(selection.selected_index(), 0);

    let effect = scheduled.landed().await.unwrap();
    assert_eq!(effect.ordnance, OrdnanceKind::PrecisionBomb);
    assert_eq!(
        session.store().quantity_of(LocationKind::Planet, "Alpha", "precision-bomb"),
        1
    );

    let mut empty = orbital_runtime::StrikeSelection::default();
    assert!(matches!(
        session.call(&mut empty, ImpactSite::new(0, 0), None),
        Err(RuntimeError::EmptySelection)
    ));
}

#[test]
fn test_deposit_refuses_unregistered_ordnance() {
    let mut session = alpha_session(Arc::new(InMemoryInventoryRepo::new()));

    let err = session.deposit("ghost-item", 5).unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownOrdnance { .. }));
    assert_eq!(session.state(), StoreState::Reconciled);

    let written = session.shutdown().unwrap();
    assert!(written.get_record(LocationKind::Planet, "Alpha").unwrap().is_empty());
}

#[test]
fn test_launch_overflow_deposits_nothing() {
    let repo = InMemoryInventoryRepo::with_document(
        r#"{"planets": {"Alpha": {"nuke": 4294967295}}}"#,
    );
    let mut session = alpha_session(Arc::new(repo));
    let catalog = CatalogOracleImpl::builtin();

    let mut manifest = LaunchManifest::new();
    manifest.load_satellite_id(&catalog, "large-satellite").unwrap();
    manifest.load_ordnance_id(&catalog, "precision-bomb").unwrap();
    manifest.load_ordnance_id(&catalog, "nuke").unwrap();

    let err = session.launch(&mut manifest).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Inventory(InventoryError::QuantityOverflow { .. })
    ));
    assert_eq!(manifest.payload().len(), 2);
    let record = session.current_record().unwrap();
    assert_eq!(record.quantity_of("precision-bomb"), 0);
    assert_eq!(record.quantity_of("nuke"), u32::MAX);
}

#[test]
fn test_selection_over_maximum_stock() {
    let repo = InMemoryInventoryRepo::with_document(
        r#"{"planets": {"Alpha": {"nuke": 4294967295, "precision-bomb": 1}}}"#,
    );
    let session = alpha_session(Arc::new(repo));

    let mut selection = session.strike_selection();
    assert_eq!(selection.len(), u64::from(u32::MAX) + 1);
    assert_eq!(selection.runs().len(), 2);

    selection.select_item("precision-bomb").unwrap();
    assert_eq!(selection.selected_index(), u64::from(u32::MAX));
    assert_eq!(
        selection.selected().unwrap().kind,
        OrdnanceKind::PrecisionBomb
    );
}

#[test]
fn test_current_location_prefers_planet() {
    let session = alpha_session(Arc::new(InMemoryInventoryRepo::new()));
    assert_eq!(session.current_location(), Location::planet("Alpha"));
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").unwrap();
}
