use crate::state::{Location, LocationKey, LocationKind};

/// Reports where the acting party currently is.
pub trait CurrentLocationOracle: Send + Sync {
    /// Planet currently played on, `None` outside the campaign.
    fn current_planet(&self) -> Option<LocationKey>;

    /// Id of the sector currently played.
    fn current_sector_id(&self) -> LocationKey;

    /// The location convenience operations act on: the current planet if
    /// there is one, otherwise the current standalone sector.
    fn current_location(&self) -> Location {
        match self.current_planet() {
            Some(planet) => Location::new(LocationKind::Planet, planet),
            None => Location::new(LocationKind::Sector, self.current_sector_id()),
        }
    }
}
