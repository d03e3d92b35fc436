use std::collections::{BTreeMap, BTreeSet};

use crate::state::{LocationKey, LocationKind};

/// Reports which locations currently exist.
///
/// Implementations derive the set from the host's save artifacts; the store
/// never inspects those artifacts itself.
pub trait LocationOracle: Send + Sync {
    fn active_locations(&self) -> ActiveLocations;
}

/// Snapshot of the active-location set.
///
/// Planets map to the sector indices played on them. Standalone sectors are
/// `None` when the enumerator found no free-floating sector at all, which
/// marks every tracked sector as stale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveLocations {
    planets: BTreeMap<LocationKey, BTreeSet<u32>>,
    sectors: Option<BTreeSet<u32>>,
}

impl ActiveLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `planet` active, with `sector` played on it.
    pub fn add_planet_sector(&mut self, planet: impl Into<LocationKey>, sector: u32) {
        self.planets.entry(planet.into()).or_default().insert(sector);
    }

    /// Marks `planet` active without recording a sector index.
    pub fn add_planet(&mut self, planet: impl Into<LocationKey>) {
        self.planets.entry(planet.into()).or_default();
    }

    /// Marks a standalone sector active.
    pub fn add_sector(&mut self, id: u32) {
        self.sectors.get_or_insert_with(BTreeSet::new).insert(id);
    }

    pub fn with_planet(mut self, planet: impl Into<LocationKey>) -> Self {
        self.add_planet(planet);
        self
    }

    pub fn with_sector(mut self, id: u32) -> Self {
        self.add_sector(id);
        self
    }

    pub fn planets(&self) -> impl Iterator<Item = &LocationKey> + '_ {
        self.planets.keys()
    }

    /// Sector indices recorded for a planet.
    pub fn planet_sectors(&self, planet: &str) -> Option<&BTreeSet<u32>> {
        self.planets.get(planet)
    }

    /// Standalone sector ids, `None` if no free-floating sector exists.
    pub fn standalone_sectors(&self) -> Option<&BTreeSet<u32>> {
        self.sectors.as_ref()
    }

    /// Keys of active locations in one namespace.
    pub fn keys(&self, kind: LocationKind) -> Vec<LocationKey> {
        match kind {
            LocationKind::Planet => self.planets.keys().cloned().collect(),
            LocationKind::Sector => self
                .sectors
                .iter()
                .flatten()
                .map(|&id| LocationKey::sector(id))
                .collect(),
        }
    }

    /// Whether `key` names an active location of `kind`.
    ///
    /// Sector keys that are not plain integers are never active.
    pub fn contains(&self, kind: LocationKind, key: &LocationKey) -> bool {
        match kind {
            LocationKind::Planet => self.planets.contains_key(key),
            LocationKind::Sector => match (&self.sectors, key.sector_id()) {
                (Some(sectors), Some(id)) => sectors.contains(&id),
                _ => false,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty() && self.sectors.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_membership_requires_integer_keys() {
        let active = ActiveLocations::new().with_sector(7);

        assert!(active.contains(LocationKind::Sector, &LocationKey::sector(7)));
        assert!(!active.contains(LocationKind::Sector, &LocationKey::from("007x")));
        assert!(!active.contains(LocationKind::Planet, &LocationKey::sector(7)));
    }

    #[test]
    fn no_standalone_sectors_is_distinct_from_empty_set() {
        let active = ActiveLocations::new().with_planet("serpulo");
        assert!(active.standalone_sectors().is_none());
        assert!(active.keys(LocationKind::Sector).is_empty());

        let mut planets = ActiveLocations::new();
        planets.add_planet_sector("serpulo", 3);
        planets.add_planet_sector("serpulo", 12);
        assert_eq!(
            planets.planet_sectors("serpulo").map(|s| s.len()),
            Some(2)
        );
    }
}
