//! Ordnance and satellite content definitions.
//!
//! The catalog is a closed, statically built registry: [`Catalog::builtin`]
//! returns the content shipped with the game, and the optional RON loader
//! lets a data file tune the same kinds' parameters. Content is consumed by
//! runtime oracles and never appears in inventory state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{Catalog, CatalogBuilder, NUKE_PROFILE, PRECISION_BOMB_PROFILE};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogFile, CatalogLoader};
