//! Repository layer for the inventory store.
//!
//! Repositories handle data that CHANGES during play: the ordnance held at
//! each location. Static content (ordnance and satellite definitions) is
//! handled by oracles, not repositories.

pub mod codec;
mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileInventoryRepository;
pub use memory::InMemoryInventoryRepo;
pub use traits::InventoryRepository;
