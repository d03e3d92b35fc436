//! Session lifecycle around the single live inventory store.
//!
//! # Lifecycle
//!
//! ```text
//! open ──► Loaded ──► Reconciled ──► Mutated* ──► Reconciled ──► Persisted
//!                        ▲                                          │
//!                        └────────── on_game_loaded / save ◄────────┘
//! ```
//!
//! [`OrbitalSession::open`] loads the persisted store (empty on any failure)
//! and reconciles it before returning, so the mutation API never sees an
//! unreconciled store. Every checkpoint that persists reconciles first.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use orbital_core::{
    ImpactSite, InventoryError, InventoryRecord, InventoryStore, LaunchManifest, Location,
    OrdnanceKind, ReconcileReport, reconcile,
};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, InventoryEvent};
use crate::impact::{ImpactScheduler, ScheduledImpact};
use crate::oracle::OracleManager;
use crate::repository::InventoryRepository;
use crate::selection::StrikeSelection;

/// Default delay between calling a strike and its impact.
pub const DEFAULT_IMPACT_DELAY: Duration = Duration::from_millis(3000);

/// Session tuning.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Delay used when a strike does not name one.
    pub impact_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            impact_delay: DEFAULT_IMPACT_DELAY,
        }
    }
}

/// Where the store is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StoreState {
    /// Read from the repository, not yet reconciled.
    Loaded,
    /// Consistent with the active locations and the catalog.
    Reconciled,
    /// Changed since the last reconciliation.
    Mutated,
    /// Reconciled and written to the repository.
    Persisted,
}

/// Owns the inventory store for one game session.
pub struct OrbitalSession {
    store: InventoryStore,
    state: StoreState,
    repository: Arc<dyn InventoryRepository>,
    oracles: OracleManager,
    config: SessionConfig,
    impacts: Option<ImpactScheduler>,
    events: Option<EventBus>,
}

impl OrbitalSession {
    /// Loads the persisted store and reconciles it.
    pub fn open(
        repository: Arc<dyn InventoryRepository>,
        oracles: OracleManager,
        config: SessionConfig,
    ) -> Self {
        let store = repository.load_or_default();
        let mut session = Self {
            store,
            state: StoreState::Loaded,
            repository,
            oracles,
            config,
            impacts: None,
            events: None,
        };
        session.reconcile();
        session
    }

    /// Enables strikes, landing through `scheduler`.
    pub fn with_impacts(mut self, scheduler: ImpactScheduler) -> Self {
        self.impacts = Some(scheduler);
        self
    }

    /// Publishes inventory events on `bus`.
    pub fn with_events(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Runs the reconciliation pass against the current oracles.
    pub fn reconcile(&mut self) -> ReconcileReport {
        let active = self.oracles.locations().active_locations();
        let report = reconcile(&mut self.store, &active, self.oracles.catalog());

        self.state = StoreState::Reconciled;
        if !report.is_clean() {
            self.publish(InventoryEvent::Reconciled {
                added: report.added.len(),
                removed: report.removed.len(),
                stripped: report.stripped.len(),
            });
        }
        report
    }

    /// Where convenience operations act.
    pub fn current_location(&self) -> Location {
        self.oracles.current().current_location()
    }

    /// Record of the current location, `None` if it is not tracked.
    pub fn current_record(&self) -> Option<&InventoryRecord> {
        let location = self.current_location();
        self.store.get_record(location.kind, location.key.as_str())
    }

    /// Deposits `amount` of `item` at `location`.
    ///
    /// Only registered ordnance can be deposited.
    pub fn add_item(&mut self, location: &Location, item: &str, amount: u32) -> Result<u32> {
        if !self.oracles.catalog().is_registered(item) {
            tracing::warn!("Refusing to deposit unknown ordnance '{}' at {}", item, location);
            return Err(RuntimeError::UnknownOrdnance { id: item.to_owned() });
        }

        let quantity = self
            .store
            .add_item(location.kind, location.key.as_str(), item, amount)?;
        self.mutated(location, item, quantity);
        Ok(quantity)
    }

    /// Withdraws `amount` of `item` from `location`, all-or-nothing.
    pub fn remove_item(&mut self, location: &Location, item: &str, amount: u32) -> Result<u32> {
        let quantity = self
            .store
            .remove_item(location.kind, location.key.as_str(), item, amount)?;
        self.mutated(location, item, quantity);
        Ok(quantity)
    }

    /// Deposits at the current location.
    pub fn deposit(&mut self, item: &str, amount: u32) -> Result<u32> {
        let location = self.current_location();
        self.add_item(&location, item, amount)
    }

    /// Withdraws from the current location.
    pub fn withdraw(&mut self, item: &str, amount: u32) -> Result<u32> {
        let location = self.current_location();
        self.remove_item(&location, item, amount)
    }

    /// Sends the manifest's payload into orbit over the current location.
    ///
    /// The payload is deposited grouped by kind and the manifest is emptied.
    /// An empty payload deposits nothing and leaves the manifest as is. Either
    /// every kind is deposited or none is.
    pub fn launch(&mut self, manifest: &mut LaunchManifest) -> Result<BTreeMap<OrdnanceKind, u32>> {
        let grouped = manifest.grouped();
        if grouped.is_empty() {
            tracing::debug!("Launch with empty payload ignored");
            return Ok(grouped);
        }

        let location = self.current_location();
        let Some(record) = self.store.get_record(location.kind, location.key.as_str()) else {
            tracing::error!("Cannot launch over {}: not tracked by the inventory store", location);
            return Err(InventoryError::UnknownLocation {
                kind: location.kind,
                key: location.key,
            }
            .into());
        };

        for (kind, count) in &grouped {
            if record.quantity_of(kind.id()).checked_add(*count).is_none() {
                tracing::warn!("Cannot launch over {}: {} stock would overflow", location, kind);
                return Err(InventoryError::QuantityOverflow {
                    item: kind.id().to_owned(),
                }
                .into());
            }
        }

        for (kind, count) in &grouped {
            self.add_item(&location, kind.id(), *count)?;
        }

        tracing::info!(
            "Launched {} units into orbit over {}",
            grouped.values().sum::<u32>(),
            location
        );
        manifest.clear();
        Ok(grouped)
    }

    /// Withdraws one `item` from the current location and schedules its impact.
    ///
    /// Nothing is scheduled unless the withdrawal succeeded; nothing is
    /// withdrawn if the ordnance is unknown or no scheduler is attached.
    pub fn strike(
        &mut self,
        item: &str,
        site: ImpactSite,
        delay: Option<Duration>,
    ) -> Result<ScheduledImpact> {
        let ordnance = self
            .oracles
            .catalog()
            .resolve_item(item)
            .ok_or_else(|| RuntimeError::UnknownOrdnance { id: item.to_owned() })?;
        let scheduler = self.impacts.clone().ok_or(RuntimeError::NoTimerRuntime)?;

        self.withdraw(item, 1)?;

        let delay = delay.unwrap_or(self.config.impact_delay);
        Ok(scheduler.schedule(&ordnance, site, delay))
    }

    /// Units available to call in at the current location.
    pub fn strike_selection(&self) -> StrikeSelection {
        match self.current_record() {
            Some(record) => StrikeSelection::from_record(record, self.oracles.catalog()),
            None => StrikeSelection::default(),
        }
    }

    /// Calls in the selected unit, then refreshes `selection`.
    pub fn call(
        &mut self,
        selection: &mut StrikeSelection,
        site: ImpactSite,
        delay: Option<Duration>,
    ) -> Result<ScheduledImpact> {
        let item = selection.selected()?.id();
        let scheduled = self.strike(item, site, delay)?;
        *selection = self.strike_selection();
        Ok(scheduled)
    }

    /// Hook for the host loading a save: the active set may have changed.
    pub fn on_game_loaded(&mut self) -> ReconcileReport {
        self.reconcile()
    }

    /// Hook for the host saving the game.
    pub fn on_game_saved(&mut self) -> Result<()> {
        self.save()
    }

    /// Reconciles, then writes the store to the repository.
    ///
    /// On failure the previous document is left in place.
    pub fn save(&mut self) -> Result<()> {
        self.reconcile();

        if let Err(err) = self.repository.save(&self.store) {
            tracing::error!(
                "Failed to save inventory to {}: {}",
                self.repository.describe(),
                err
            );
            return Err(err.into());
        }

        self.state = StoreState::Persisted;
        tracing::info!(
            "Saved inventory ({} locations) to {}",
            self.store.location_count(),
            self.repository.describe()
        );
        self.publish(InventoryEvent::Persisted {
            locations: self.store.location_count(),
        });
        Ok(())
    }

    /// Final reconcile and persist; returns the store as written.
    pub fn shutdown(mut self) -> Result<InventoryStore> {
        self.save()?;
        Ok(self.store)
    }

    fn mutated(&mut self, location: &Location, item: &str, quantity: u32) {
        self.state = StoreState::Mutated;
        self.publish(InventoryEvent::Changed {
            location: location.clone(),
            item: item.to_owned(),
            quantity,
        });
    }

    fn publish(&self, event: InventoryEvent) {
        if let Some(bus) = &self.events {
            bus.publish(Event::Inventory(event));
        }
    }
}
