//! Current-location oracles.
use orbital_core::{CurrentLocationOracle, LocationKey};

use super::locations::SAVE_EXTENSION;

/// CurrentLocationOracle derived from the save file being played.
///
/// The sector id is the text after the last `-` of the save name; the planet
/// is reported by the host separately, `None` outside the campaign.
#[derive(Clone, Debug)]
pub struct SaveFileCurrentLocation {
    planet: Option<LocationKey>,
    save_name: String,
}

impl SaveFileCurrentLocation {
    pub fn new(planet: Option<LocationKey>, save_name: impl Into<String>) -> Self {
        Self {
            planet,
            save_name: save_name.into(),
        }
    }

    pub fn save_name(&self) -> &str {
        &self.save_name
    }
}

impl CurrentLocationOracle for SaveFileCurrentLocation {
    fn current_planet(&self) -> Option<LocationKey> {
        self.planet.clone()
    }

    fn current_sector_id(&self) -> LocationKey {
        let stem = self
            .save_name
            .strip_suffix(SAVE_EXTENSION)
            .unwrap_or(&self.save_name);
        let id = stem.rsplit('-').next().unwrap_or(stem);
        LocationKey::from(id)
    }
}

/// CurrentLocationOracle pinned to one location.
#[derive(Clone, Debug)]
pub struct FixedCurrentLocation {
    planet: Option<LocationKey>,
    sector: LocationKey,
}

impl FixedCurrentLocation {
    /// Playing a sector on `planet`.
    pub fn planet(planet: impl Into<LocationKey>, sector: u32) -> Self {
        Self {
            planet: Some(planet.into()),
            sector: LocationKey::sector(sector),
        }
    }

    /// Playing a standalone sector.
    pub fn sector(id: u32) -> Self {
        Self {
            planet: None,
            sector: LocationKey::sector(id),
        }
    }
}

impl CurrentLocationOracle for FixedCurrentLocation {
    fn current_planet(&self) -> Option<LocationKey> {
        self.planet.clone()
    }

    fn current_sector_id(&self) -> LocationKey {
        self.sector.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbital_core::Location;

    #[test]
    fn test_sector_id_from_save_name() {
        let oracle = SaveFileCurrentLocation::new(None, "sector-42.msav");
        assert_eq!(oracle.current_sector_id(), LocationKey::sector(42));
        assert_eq!(oracle.current_location(), Location::sector(42));

        let oracle = SaveFileCurrentLocation::new(None, "custom");
        assert_eq!(oracle.current_sector_id(), LocationKey::from("custom"));
    }

    #[test]
    fn test_planet_takes_precedence() {
        let oracle =
            SaveFileCurrentLocation::new(Some(LocationKey::from("serpulo")), "sector-serpulo-12.msav");

        assert_eq!(oracle.current_sector_id(), LocationKey::sector(12));
        assert_eq!(oracle.current_location(), Location::planet("serpulo"));
        assert_eq!(
            FixedCurrentLocation::planet("erekir", 3).current_location(),
            Location::planet("erekir")
        );
    }
}
