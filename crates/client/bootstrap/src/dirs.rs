//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for cache and data directories.

use std::path::PathBuf;

const APPLICATION: &str = "orbital";

/// Get the platform-specific data directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/orbital`
/// - Linux: `~/.local/share/orbital` (or `$XDG_DATA_HOME/orbital`)
/// - Windows: `%APPDATA%\orbital`
/// - Fallback: `./orbital_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./orbital_data"))
}

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/orbital/logs`
/// - Linux: `~/.cache/orbital/logs` (or `$XDG_CACHE_HOME/orbital/logs`)
/// - Windows: `%LOCALAPPDATA%\orbital\logs`
/// - Fallback: `/tmp/orbital/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/orbital"))
        .join("logs")
}
