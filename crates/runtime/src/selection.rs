//! Strike selection: which held unit the next call-in uses.

use orbital_core::{CatalogOracle, InventoryRecord, OrdnanceDefinition};

use crate::api::{Result, RuntimeError};

/// Ordnance units held at one location plus a cursor.
///
/// Units are ordered by identifier and addressed one by one, but stored as
/// `(definition, count)` runs so a large stock costs one entry.
/// Identifiers the catalog does not resolve are skipped.
#[derive(Clone, Debug, Default)]
pub struct StrikeSelection {
    runs: Vec<(OrdnanceDefinition, u32)>,
    selected: u64,
}

impl StrikeSelection {
    pub fn from_record(record: &InventoryRecord, catalog: &dyn CatalogOracle) -> Self {
        let mut runs = Vec::new();
        for (item, quantity) in record.iter() {
            match catalog.resolve_item(item) {
                Some(definition) => runs.push((definition, quantity)),
                None => tracing::debug!("Skipping unknown ordnance '{}' in selection", item),
            }
        }
        Self { runs, selected: 0 }
    }

    /// Held ordnance with the number of units of each.
    pub fn runs(&self) -> &[(OrdnanceDefinition, u32)] {
        &self.runs
    }

    /// Total units across all runs.
    pub fn len(&self) -> u64 {
        self.runs.iter().map(|(_, count)| u64::from(*count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn selected_index(&self) -> u64 {
        self.selected
    }

    /// The unit at `index`, counting units across runs.
    pub fn unit(&self, index: u64) -> Option<&OrdnanceDefinition> {
        let mut start = 0u64;
        for (definition, count) in &self.runs {
            let end = start + u64::from(*count);
            if index < end {
                return Some(definition);
            }
            start = end;
        }
        None
    }

    /// The unit the next call-in uses.
    pub fn selected(&self) -> Result<&OrdnanceDefinition> {
        if self.is_empty() {
            return Err(RuntimeError::EmptySelection);
        }
        self.unit(self.selected)
            .ok_or(RuntimeError::SelectionOutOfRange {
                index: self.selected,
                len: self.len(),
            })
    }

    /// Moves the cursor to `index`.
    pub fn select(&mut self, index: u64) -> Result<()> {
        let len = self.len();
        if len == 0 {
            return Err(RuntimeError::EmptySelection);
        }
        if index >= len {
            return Err(RuntimeError::SelectionOutOfRange { index, len });
        }
        self.selected = index;
        Ok(())
    }

    /// Moves the cursor to the first unit of the given identifier.
    pub fn select_item(&mut self, item: &str) -> Result<()> {
        let mut start = 0u64;
        for (definition, count) in &self.runs {
            if definition.id() == item && *count > 0 {
                return self.select(start);
            }
            start += u64::from(*count);
        }
        Err(RuntimeError::UnknownOrdnance { id: item.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::CatalogOracleImpl;
    use orbital_core::OrdnanceKind;

    fn selection() -> StrikeSelection {
        let record =
            InventoryRecord::from_counts([("precision-bomb", 2), ("nuke", 1), ("ghost-item", 3)]);
        StrikeSelection::from_record(&record, &CatalogOracleImpl::builtin())
    }

    #[test]
    fn test_addresses_one_entry_per_unit() {
        let selection = selection();
        let kinds: Vec<OrdnanceKind> = (0..selection.len())
            .filter_map(|index| selection.unit(index))
            .map(|unit| unit.kind)
            .collect();

        assert_eq!(
            kinds,
            vec![
                OrdnanceKind::Nuke,
                OrdnanceKind::PrecisionBomb,
                OrdnanceKind::PrecisionBomb
            ]
        );
        assert_eq!(selection.runs().len(), 2);
        assert_eq!(selection.selected().unwrap().kind, OrdnanceKind::Nuke);
    }

    #[test]
    fn test_select_bounds() {
        let mut selection = selection();

        selection.select(2).unwrap();
        assert_eq!(selection.selected_index(), 2);
        assert!(matches!(
            selection.select(3),
            Err(RuntimeError::SelectionOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(selection.selected_index(), 2);

        selection.select_item("precision-bomb").unwrap();
        assert_eq!(selection.selected_index(), 1);
    }

    #[test]
    fn test_empty_selection() {
        let mut selection =
            StrikeSelection::from_record(&InventoryRecord::new(), &CatalogOracleImpl::builtin());

        assert!(matches!(selection.selected(), Err(RuntimeError::EmptySelection)));
        assert!(matches!(selection.select(0), Err(RuntimeError::EmptySelection)));
    }

    #[test]
    fn test_maximum_stock_stays_one_run() {
        let record = InventoryRecord::from_counts([("nuke", u32::MAX), ("precision-bomb", 1)]);
        let mut selection = StrikeSelection::from_record(&record, &CatalogOracleImpl::builtin());

        assert_eq!(selection.runs().len(), 2);
        assert_eq!(selection.len(), u64::from(u32::MAX) + 1);

        selection.select(u64::from(u32::MAX) - 1).unwrap();
        assert_eq!(selection.selected().unwrap().kind, OrdnanceKind::Nuke);
        selection.select(u64::from(u32::MAX)).unwrap();
        assert_eq!(selection.selected().unwrap().kind, OrdnanceKind::PrecisionBomb);
    }
}
