//! Shared bootstrap utilities for orbital front-ends.
//!
//! Provides configuration loading, platform directories, oracle assembly, and
//! session setup that can be reused by the CLI or other front-end crates.
pub mod builder;
pub mod config;
pub mod dirs;
pub mod oracles;

pub use builder::{SessionBuilder, SessionSetup};
pub use config::OrbitalConfig;
pub use oracles::{ContentOracleFactory, OracleFactory};
