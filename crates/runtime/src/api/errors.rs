//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, the inventory mutation API, launch
//! manifests and impact scheduling so clients can bubble them up with
//! consistent context.
use thiserror::Error;

use orbital_core::{InventoryError, LaunchError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("'{id}' is not a registered ordnance")]
    UnknownOrdnance { id: String },

    #[error("impact scheduling requires a tokio runtime")]
    NoTimerRuntime,

    #[error("no ordnance available to call in")]
    EmptySelection,

    #[error("selection {index} is out of range for {len} units")]
    SelectionOutOfRange { index: u64, len: u64 },

    #[error("impact task failed")]
    ImpactJoin(#[source] tokio::task::JoinError),
}
