//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use orbital_runtime::{FileInventoryRepository, SessionConfig};

use crate::dirs;

/// Planet names known to the host when none are configured.
pub const DEFAULT_PLANETS: &[&str] = &["serpulo", "erekir", "sun"];

/// Default delay between a strike call and its impact, in milliseconds.
pub const DEFAULT_IMPACT_DELAY_MS: u64 = 3000;

/// Configuration required to bootstrap an orbital session.
#[derive(Clone, Debug)]
pub struct OrbitalConfig {
    /// Writable data directory; platform default when unset.
    pub data_dir: Option<PathBuf>,
    /// Directory of save artifacts; `<data dir>/saves` when unset.
    pub save_dir: Option<PathBuf>,
    /// Planet names the host knows.
    pub planets: Vec<String>,
    /// Planet currently played on, `None` outside the campaign.
    pub current_planet: Option<String>,
    /// File name of the save currently played.
    pub current_save: Option<String>,
    /// RON catalog overriding the built-in content.
    pub catalog_path: Option<PathBuf>,
    pub impact_delay_ms: u64,
}

impl Default for OrbitalConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            save_dir: None,
            planets: DEFAULT_PLANETS.iter().map(|p| p.to_string()).collect(),
            current_planet: None,
            current_save: None,
            catalog_path: None,
            impact_delay_ms: DEFAULT_IMPACT_DELAY_MS,
        }
    }
}

impl OrbitalConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ORBITAL_DATA_DIR` - Writable data directory (default: platform-specific)
    /// - `ORBITAL_SAVE_DIR` - Save artifacts to scan (default: `<data dir>/saves`)
    /// - `ORBITAL_PLANETS` - Comma-separated known planets (default: serpulo,erekir,sun)
    /// - `ORBITAL_CURRENT_PLANET` - Planet currently played on (default: none)
    /// - `ORBITAL_CURRENT_SAVE` - Save file currently played (default: none)
    /// - `ORBITAL_CATALOG` - RON catalog file (default: built-in content)
    /// - `ORBITAL_IMPACT_DELAY_MS` - Default strike delay (default: 3000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.data_dir = non_empty(lookup("ORBITAL_DATA_DIR")).map(PathBuf::from);
        config.save_dir = non_empty(lookup("ORBITAL_SAVE_DIR")).map(PathBuf::from);

        if let Some(planets) = non_empty(lookup("ORBITAL_PLANETS")) {
            config.planets = split_list(&planets);
        }

        config.current_planet = non_empty(lookup("ORBITAL_CURRENT_PLANET"));
        config.current_save = non_empty(lookup("ORBITAL_CURRENT_SAVE"));
        config.catalog_path = non_empty(lookup("ORBITAL_CATALOG")).map(PathBuf::from);

        if let Some(delay) = read_var::<u64>(&lookup, "ORBITAL_IMPACT_DELAY_MS") {
            config.impact_delay_ms = delay;
        }

        config
    }

    /// Data directory, falling back to the platform default.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(dirs::data_dir)
    }

    /// Save directory, falling back to `<data dir>/saves`.
    pub fn resolved_save_dir(&self) -> PathBuf {
        self.save_dir
            .clone()
            .unwrap_or_else(|| self.resolved_data_dir().join("saves"))
    }

    /// Path of the inventory document.
    pub fn storage_path(&self) -> PathBuf {
        FileInventoryRepository::in_data_dir(self.resolved_data_dir())
            .path()
            .to_path_buf()
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            impact_delay: Duration::from_millis(self.impact_delay_ms),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> OrbitalConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        OrbitalConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);

        assert_eq!(config.planets, vec!["serpulo", "erekir", "sun"]);
        assert_eq!(config.impact_delay_ms, 3000);
        assert!(config.current_save.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("ORBITAL_DATA_DIR", "/tmp/orbital"),
            ("ORBITAL_PLANETS", " serpulo , , the-moon "),
            ("ORBITAL_CURRENT_SAVE", "sector-42.msav"),
            ("ORBITAL_IMPACT_DELAY_MS", "250"),
        ]);

        assert_eq!(config.planets, vec!["serpulo", "the-moon"]);
        assert_eq!(config.current_save.as_deref(), Some("sector-42.msav"));
        assert_eq!(config.session_config().impact_delay, Duration::from_millis(250));
        assert_eq!(
            config.resolved_save_dir(),
            PathBuf::from("/tmp/orbital/saves")
        );
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/tmp/orbital/mods/airstrike-data/satellite_data.json")
        );
    }

    #[test]
    fn invalid_delay_keeps_default() {
        let config = config_from(&[("ORBITAL_IMPACT_DELAY_MS", "soon")]);
        assert_eq!(config.impact_delay_ms, DEFAULT_IMPACT_DELAY_MS);
    }
}
