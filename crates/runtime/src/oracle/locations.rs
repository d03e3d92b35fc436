//! Location enumerators: which planets and sectors currently exist.
//!
//! The host keeps one save artifact per played sector. File names follow
//! `sector-<planet>-<index>.msav` for sectors on a planet and
//! `sector-<id>.msav` for standalone sectors; backups are ignored.
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use orbital_core::{ActiveLocations, LocationKey, LocationOracle};

/// Extension of save artifacts.
pub const SAVE_EXTENSION: &str = ".msav";

const SECTOR_PREFIX: &str = "sector-";

/// A save file name broken into its location parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveName {
    /// Sector `index` on the named planet.
    Planet { planet: String, index: String },
    /// Standalone sector.
    Sector { id: String },
}

impl SaveName {
    /// Splits a save file name into its location parts.
    ///
    /// Returns `None` for files that are not save artifacts or are backups.
    pub fn parse(file_name: &str) -> Option<Self> {
        if file_name.contains("backup") {
            return None;
        }
        let stem = file_name.strip_suffix(SAVE_EXTENSION)?;
        let stem = stem.replace(SECTOR_PREFIX, "");

        match stem.rsplit_once('-') {
            Some((planet, index)) => Some(SaveName::Planet {
                planet: planet.to_string(),
                index: index.to_string(),
            }),
            None => Some(SaveName::Sector { id: stem }),
        }
    }
}

/// LocationOracle that scans a save directory.
pub struct SaveDirLocations {
    save_dir: PathBuf,
    planets: BTreeSet<String>,
}

impl SaveDirLocations {
    /// `planets` lists the planet names the host knows; saves naming any
    /// other planet are skipped.
    pub fn new<I, S>(save_dir: impl AsRef<Path>, planets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            save_dir: save_dir.as_ref().to_path_buf(),
            planets: planets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    fn save_names(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.save_dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    "Cannot list save directory {}: {}",
                    self.save_dir.display(),
                    err
                );
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort_unstable();
        names
    }
}

impl LocationOracle for SaveDirLocations {
    fn active_locations(&self) -> ActiveLocations {
        let mut active = ActiveLocations::new();

        for file_name in self.save_names() {
            match SaveName::parse(&file_name) {
                Some(SaveName::Sector { id }) => match id.parse::<u32>() {
                    Ok(id) => active.add_sector(id),
                    Err(_) => tracing::warn!("Invalid sector id '{}' in save {}", id, file_name),
                },
                Some(SaveName::Planet { planet, index }) => {
                    if !self.planets.contains(&planet) {
                        tracing::error!("Unknown planet {} in save {}", planet, file_name);
                        continue;
                    }
                    match index.parse::<u32>() {
                        Ok(index) => active.add_planet_sector(planet, index),
                        Err(_) => tracing::warn!(
                            "Invalid sector index '{}' in save {}",
                            index,
                            file_name
                        ),
                    }
                }
                None => {}
            }
        }

        tracing::debug!(
            "Found {} active planets in {}",
            active.planets().count(),
            self.save_dir.display()
        );

        active
    }
}

/// LocationOracle that always reports the same set.
#[derive(Clone, Debug, Default)]
pub struct FixedLocations {
    active: ActiveLocations,
}

impl FixedLocations {
    pub fn new(active: ActiveLocations) -> Self {
        Self { active }
    }

    /// Planets only, no standalone sectors.
    pub fn planets<I, S>(planets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LocationKey>,
    {
        let mut active = ActiveLocations::new();
        for planet in planets {
            active.add_planet(planet);
        }
        Self::new(active)
    }
}

impl LocationOracle for FixedLocations {
    fn active_locations(&self) -> ActiveLocations {
        self.active.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbital_core::LocationKind;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_parse_save_names() {
        assert_eq!(
            SaveName::parse("sector-serpulo-12.msav"),
            Some(SaveName::Planet {
                planet: "serpulo".to_string(),
                index: "12".to_string(),
            })
        );
        assert_eq!(
            SaveName::parse("sector-the-moon-3.msav"),
            Some(SaveName::Planet {
                planet: "the-moon".to_string(),
                index: "3".to_string(),
            })
        );
        assert_eq!(
            SaveName::parse("sector-42.msav"),
            Some(SaveName::Sector {
                id: "42".to_string()
            })
        );
        assert_eq!(SaveName::parse("sector-serpulo-12-backup.msav"), None);
        assert_eq!(SaveName::parse("settings.bin"), None);
    }

    #[test]
    fn test_scan_save_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        touch(dir, "sector-serpulo-12.msav");
        touch(dir, "sector-serpulo-15.msav");
        touch(dir, "sector-erekir-2.msav");
        touch(dir, "sector-42.msav");
        touch(dir, "sector-pluto-1.msav");
        touch(dir, "sector-serpulo-12-backup.msav");
        touch(dir, "sector-serpulo-x.msav");
        touch(dir, "notes.txt");

        let oracle = SaveDirLocations::new(dir, ["serpulo", "erekir"]);
        let active = oracle.active_locations();

        assert_eq!(
            active.keys(LocationKind::Planet),
            vec![LocationKey::from("erekir"), LocationKey::from("serpulo")]
        );
        assert_eq!(
            active
                .planet_sectors("serpulo")
                .map(|sectors| sectors.iter().copied().collect::<Vec<_>>()),
            Some(vec![12, 15])
        );
        assert_eq!(active.keys(LocationKind::Sector), vec![LocationKey::sector(42)]);
    }

    #[test]
    fn test_no_standalone_saves_reports_none() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "sector-serpulo-1.msav");

        let active = SaveDirLocations::new(temp_dir.path(), ["serpulo"]).active_locations();

        assert!(active.standalone_sectors().is_none());
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let oracle = SaveDirLocations::new(temp_dir.path().join("absent"), ["serpulo"]);

        assert!(oracle.active_locations().is_empty());
    }
}
