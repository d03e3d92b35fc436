//! File-based repository implementations.

mod inventory;

pub use inventory::FileInventoryRepository;
