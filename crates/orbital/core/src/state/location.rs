//! Location identifiers used as keys into the inventory store.

use std::borrow::Borrow;
use std::fmt;

/// Namespace a [`LocationKey`] belongs to.
///
/// Planet names and standalone sector ids are both strings, so the store keeps
/// them in two separate mappings to avoid collisions (`"42"` can be a planet
/// name and a sector id at the same time).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LocationKind {
    /// A planet, keyed by its stable textual name.
    Planet,
    /// A sector that does not belong to any planet, keyed by its integer id.
    Sector,
}

/// Textual key of a planet or a standalone sector.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationKey(String);

impl LocationKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key of a standalone sector.
    pub fn sector(id: u32) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the key as a sector id.
    ///
    /// Returns `None` for keys that are not in canonical integer form (signs,
    /// leading zeros, whitespace); such keys can never match an active sector.
    pub fn sector_id(&self) -> Option<u32> {
        let id: u32 = self.0.parse().ok()?;
        (id.to_string() == self.0).then_some(id)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LocationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocationKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for LocationKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A fully qualified location: namespace plus key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub kind: LocationKind,
    pub key: LocationKey,
}

impl Location {
    pub fn new(kind: LocationKind, key: impl Into<LocationKey>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }

    pub fn planet(name: impl Into<LocationKey>) -> Self {
        Self::new(LocationKind::Planet, name)
    }

    pub fn sector(id: u32) -> Self {
        Self::new(LocationKind::Sector, LocationKey::sector(id))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_keys_parse_back_to_ids() {
        assert_eq!(LocationKey::sector(17).sector_id(), Some(17));
        assert_eq!(LocationKey::from("serpulo").sector_id(), None);
        assert_eq!(LocationKey::from("-3").sector_id(), None);
        assert_eq!(LocationKey::from("+3").sector_id(), None);
        assert_eq!(LocationKey::from("007").sector_id(), None);
    }

    #[test]
    fn location_display_names_namespace() {
        assert_eq!(Location::planet("erekir").to_string(), "planet erekir");
        assert_eq!(Location::sector(5).to_string(), "sector 5");
    }
}
