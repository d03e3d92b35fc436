//! Per-location multiset of ordnance identifiers.
//!
//! # Two views of one multiset
//!
//! A record can be read and built either as counts per identifier
//! (`{"nuke": 2}`) or as a flat list of repeated identifiers
//! (`["nuke", "nuke"]`). Both describe the same multiset; the record stores
//! counts and derives the list view on demand.
//!
//! Zero is never stored: an identifier whose quantity drops to zero is removed.

use std::collections::BTreeMap;

/// Quantity of each ordnance identifier held at one location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RecordRepr"))]
pub struct InventoryRecord {
    counts: BTreeMap<String, u32>,
}

impl InventoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(identifier, count)` pairs.
    ///
    /// Zero counts are skipped and repeated identifiers are summed
    /// (saturating at `u32::MAX`).
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut record = Self::new();
        for (item, count) in counts {
            if count == 0 {
                continue;
            }
            let entry = record.counts.entry(item.into()).or_insert(0);
            *entry = entry.saturating_add(count);
        }
        record
    }

    /// Builds a record from the repeated-identifier list view.
    pub fn from_units<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_counts(units.into_iter().map(|item| (item, 1)))
    }

    /// Quantity held for `item`, `0` if absent.
    pub fn quantity_of(&self, item: &str) -> u32 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.counts.values().map(|&count| u64::from(count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.counts.contains_key(item)
    }

    /// Iterates `(identifier, quantity)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(item, &count)| (item.as_str(), count))
    }

    /// Iterates the list view: each identifier repeated by its quantity.
    pub fn units(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts
            .iter()
            .flat_map(|(item, &count)| std::iter::repeat_n(item.as_str(), count as usize))
    }

    pub fn counts(&self) -> &BTreeMap<String, u32> {
        &self.counts
    }

    /// Adds `amount` of `item`, returning the new quantity.
    ///
    /// Returns `None` and leaves the record untouched on overflow.
    pub(crate) fn increment(&mut self, item: &str, amount: u32) -> Option<u32> {
        let current = self.quantity_of(item);
        let updated = current.checked_add(amount)?;
        if updated > 0 {
            self.counts.insert(item.to_owned(), updated);
        }
        Some(updated)
    }

    /// Removes `amount` of `item`, all-or-nothing.
    ///
    /// On success returns the remaining quantity; the entry is dropped when it
    /// reaches zero. On failure returns the quantity actually held.
    pub(crate) fn decrement(&mut self, item: &str, amount: u32) -> Result<u32, u32> {
        let current = self.quantity_of(item);
        if current < amount {
            return Err(current);
        }
        let remaining = current - amount;
        if remaining == 0 {
            self.counts.remove(item);
        } else {
            self.counts.insert(item.to_owned(), remaining);
        }
        Ok(remaining)
    }

    /// Keeps only identifiers accepted by `keep`; returns the removed entries.
    pub(crate) fn retain_items<F>(&mut self, mut keep: F) -> Vec<(String, u32)>
    where
        F: FnMut(&str) -> bool,
    {
        let rejected: Vec<String> = self
            .counts
            .keys()
            .filter(|item| !keep(item))
            .cloned()
            .collect();

        rejected
            .into_iter()
            .filter_map(|item| self.counts.remove_entry(&item))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for InventoryRecord {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Self::from_counts(iter)
    }
}

// Serialization always commits to the counts form.
#[cfg(feature = "serde")]
impl serde::Serialize for InventoryRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.counts, serializer)
    }
}

/// Accepted on-disk shapes of a record.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RecordRepr {
    Counts(BTreeMap<String, u32>),
    Units(Vec<String>),
}

#[cfg(feature = "serde")]
impl From<RecordRepr> for InventoryRecord {
    fn from(repr: RecordRepr) -> Self {
        match repr {
            RecordRepr::Counts(counts) => Self::from_counts(counts),
            RecordRepr::Units(units) => Self::from_units(units),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_and_list_views_describe_the_same_multiset() {
        let by_counts = InventoryRecord::from_counts([("nuke", 2), ("precision-bomb", 1)]);
        let by_units = InventoryRecord::from_units(["precision-bomb", "nuke", "nuke"]);

        assert_eq!(by_counts, by_units);
        assert_eq!(
            by_units.units().collect::<Vec<_>>(),
            vec!["nuke", "nuke", "precision-bomb"]
        );
        assert_eq!(by_units.total_quantity(), 3);
    }

    #[test]
    fn zero_counts_are_never_stored() {
        let record = InventoryRecord::from_counts([("nuke", 0), ("precision-bomb", 3)]);
        assert!(!record.contains("nuke"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn decrement_is_all_or_nothing() {
        let mut record = InventoryRecord::from_counts([("nuke", 2)]);

        assert_eq!(record.decrement("nuke", 3), Err(2));
        assert_eq!(record.quantity_of("nuke"), 2);

        assert_eq!(record.decrement("nuke", 2), Ok(0));
        assert!(!record.contains("nuke"));
        assert!(record.is_empty());
    }

    #[test]
    fn increment_refuses_overflow() {
        let mut record = InventoryRecord::from_counts([("nuke", u32::MAX)]);
        assert_eq!(record.increment("nuke", 1), None);
        assert_eq!(record.quantity_of("nuke"), u32::MAX);
    }

    #[test]
    fn retain_items_reports_removed_entries() {
        let mut record = InventoryRecord::from_counts([("nuke", 2), ("ghost-item", 1)]);
        let removed = record.retain_items(|item| item == "nuke");

        assert_eq!(removed, vec![("ghost-item".to_string(), 1)]);
        assert_eq!(record, InventoryRecord::from_counts([("nuke", 2)]));
    }
}
