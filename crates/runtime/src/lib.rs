//! Runtime services around the orbital inventory store.
//!
//! This crate wires the pure inventory logic of `orbital-core` to the outside
//! world: oracle implementations over content and save artifacts, the
//! persistence codec and repositories, the impact scheduler, and the
//! [`OrbitalSession`] that owns the one live store.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the store lifecycle and the mutation entry points
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`impact`] schedules delayed impacts
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod events;
pub mod impact;
pub mod oracle;
pub mod repository;
pub mod selection;
pub mod session;

pub use api::{Result, RuntimeError};
pub use events::{Event, EventBus, ImpactEvent, InventoryEvent, Topic};
pub use impact::{ImpactScheduler, ImpactSink, ScheduledImpact};
pub use oracle::{
    CatalogOracleImpl, FixedCurrentLocation, FixedLocations, OracleManager,
    SaveDirLocations, SaveFileCurrentLocation,
};
pub use repository::{
    FileInventoryRepository, InMemoryInventoryRepo, InventoryRepository, RepositoryError,
};
pub use selection::StrikeSelection;
pub use session::{DEFAULT_IMPACT_DELAY, OrbitalSession, SessionConfig, StoreState};
