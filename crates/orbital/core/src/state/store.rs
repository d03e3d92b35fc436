//! The inventory store and its mutation API.
//!
//! The store holds exactly two mappings, one per [`LocationKind`]. Reads are
//! free; writes go through [`InventoryStore::add_item`] and
//! [`InventoryStore::remove_item`] (or the reconciliation pass in
//! [`crate::reconcile`]) so that quantities never go negative and untracked
//! locations are never created implicitly.

use std::collections::BTreeMap;

use crate::state::{InventoryError, InventoryRecord, LocationKey, LocationKind};

/// Ordnance held in orbit, per planet and per standalone sector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryStore {
    #[cfg_attr(feature = "serde", serde(rename = "planets", default))]
    planets: BTreeMap<LocationKey, InventoryRecord>,
    #[cfg_attr(feature = "serde", serde(rename = "sectors", default))]
    sectors: BTreeMap<LocationKey, InventoryRecord>,
}

impl InventoryStore {
    /// Creates an empty store tracking no locations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a store from previously persisted records.
    ///
    /// The result is not reconciled; callers run
    /// [`reconcile`](crate::reconcile::reconcile) before mutating it.
    pub fn from_records<P, S>(planets: P, sectors: S) -> Self
    where
        P: IntoIterator<Item = (LocationKey, InventoryRecord)>,
        S: IntoIterator<Item = (LocationKey, InventoryRecord)>,
    {
        Self {
            planets: planets.into_iter().collect(),
            sectors: sectors.into_iter().collect(),
        }
    }

    /// Record for a location, `None` if the location is not tracked.
    ///
    /// `None` is distinct from an empty record: it means the location is
    /// unknown to the store.
    pub fn get_record(&self, kind: LocationKind, key: &str) -> Option<&InventoryRecord> {
        self.mapping(kind).get(key)
    }

    /// Quantity of `item` at a location, `0` if absent.
    pub fn quantity_of(&self, kind: LocationKind, key: &str, item: &str) -> u32 {
        self.get_record(kind, key)
            .map_or(0, |record| record.quantity_of(item))
    }

    /// Sum of all quantities at a location.
    pub fn total_quantity(&self, kind: LocationKind, key: &str) -> u64 {
        self.get_record(kind, key)
            .map_or(0, InventoryRecord::total_quantity)
    }

    pub fn contains(&self, kind: LocationKind, key: &str) -> bool {
        self.mapping(kind).contains_key(key)
    }

    /// All records of one namespace, ordered by key.
    pub fn records(&self, kind: LocationKind) -> &BTreeMap<LocationKey, InventoryRecord> {
        self.mapping(kind)
    }

    pub fn keys(&self, kind: LocationKind) -> impl Iterator<Item = &LocationKey> + '_ {
        self.mapping(kind).keys()
    }

    /// Number of tracked locations across both namespaces.
    pub fn location_count(&self) -> usize {
        self.planets.len() + self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty() && self.sectors.is_empty()
    }

    /// Deposits `amount` units of `item` at a tracked location.
    ///
    /// Returns the new quantity. The location must already exist;
    /// [`InventoryError::UnknownLocation`] is logged as a logic error and the
    /// store is left untouched.
    pub fn add_item(
        &mut self,
        kind: LocationKind,
        key: &str,
        item: &str,
        amount: u32,
    ) -> Result<u32, InventoryError> {
        if amount == 0 {
            return Err(InventoryError::InvalidAmount);
        }

        let record = self.tracked_record_mut(kind, key)?;
        let updated = record
            .increment(item, amount)
            .ok_or_else(|| InventoryError::QuantityOverflow {
                item: item.to_owned(),
            })?;

        tracing::debug!("Added {} '{}' to {} {} (now {})", amount, item, kind, key, updated);
        Ok(updated)
    }

    /// Withdraws `amount` units of `item` from a tracked location.
    ///
    /// All-or-nothing: if fewer than `amount` units are held nothing changes
    /// and [`InventoryError::InsufficientQuantity`] is returned. Returns the
    /// remaining quantity; an item reaching zero is dropped from the record.
    pub fn remove_item(
        &mut self,
        kind: LocationKind,
        key: &str,
        item: &str,
        amount: u32,
    ) -> Result<u32, InventoryError> {
        if amount == 0 {
            return Err(InventoryError::InvalidAmount);
        }

        let record = self.tracked_record_mut(kind, key)?;
        let remaining =
            record
                .decrement(item, amount)
                .map_err(|available| InventoryError::InsufficientQuantity {
                    item: item.to_owned(),
                    requested: amount,
                    available,
                })?;

        tracing::debug!(
            "Removed {} '{}' from {} {} ({} left)",
            amount,
            item,
            kind,
            key,
            remaining
        );
        Ok(remaining)
    }

    fn tracked_record_mut(
        &mut self,
        kind: LocationKind,
        key: &str,
    ) -> Result<&mut InventoryRecord, InventoryError> {
        match self.mapping_mut(kind).get_mut(key) {
            Some(record) => Ok(record),
            None => {
                tracing::error!("{} {} not tracked by the inventory store", kind, key);
                Err(InventoryError::UnknownLocation {
                    kind,
                    key: LocationKey::from(key),
                })
            }
        }
    }

    fn mapping(&self, kind: LocationKind) -> &BTreeMap<LocationKey, InventoryRecord> {
        match kind {
            LocationKind::Planet => &self.planets,
            LocationKind::Sector => &self.sectors,
        }
    }

    pub(crate) fn mapping_mut(
        &mut self,
        kind: LocationKind,
    ) -> &mut BTreeMap<LocationKey, InventoryRecord> {
        match kind {
            LocationKind::Planet => &mut self.planets,
            LocationKind::Sector => &mut self.sectors,
        }
    }
}
