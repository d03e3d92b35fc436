//! In-memory InventoryRepository implementation for tests and local runs.

use std::sync::RwLock;

use orbital_core::InventoryStore;

use crate::repository::codec;
use crate::repository::{InventoryRepository, RepositoryError, Result};

/// In-memory implementation of InventoryRepository.
///
/// Keeps the encoded document rather than the store, so loads exercise the
/// same codec as the file repository and tests can seed arbitrary text.
pub struct InMemoryInventoryRepo {
    document: RwLock<Option<String>>,
}

impl InMemoryInventoryRepo {
    /// Create a repository with nothing saved.
    pub fn new() -> Self {
        Self {
            document: RwLock::new(None),
        }
    }

    /// Create a repository holding `text` as the saved document.
    pub fn with_document(text: impl Into<String>) -> Self {
        Self {
            document: RwLock::new(Some(text.into())),
        }
    }

    /// The currently saved document, if any.
    pub fn document(&self) -> Result<Option<String>> {
        let document = self
            .document
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(document.clone())
    }
}

impl Default for InMemoryInventoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryRepository for InMemoryInventoryRepo {
    fn load(&self) -> Result<Option<InventoryStore>> {
        let document = self
            .document
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        document.as_deref().map(codec::decode).transpose()
    }

    fn save(&self, store: &InventoryStore) -> Result<()> {
        let text = codec::encode(store)?;
        let mut document = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *document = Some(text);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbital_core::{InventoryRecord, LocationKey, LocationKind};

    #[test]
    fn test_save_and_load() {
        let repo = InMemoryInventoryRepo::new();
        assert!(repo.load().unwrap().is_none());

        let store = InventoryStore::from_records(
            [(
                LocationKey::from("erekir"),
                InventoryRecord::from_counts([("nuke", 1)]),
            )],
            [],
        );
        repo.save(&store).unwrap();

        assert_eq!(repo.load().unwrap(), Some(store));
        assert!(repo.document().unwrap().unwrap().contains("\"erekir\""));
    }

    #[test]
    fn test_seeded_document_uses_codec() {
        let repo = InMemoryInventoryRepo::with_document(r#"{"sectors": {"4": ["nuke"]}}"#);
        let store = repo.load().unwrap().unwrap();

        assert_eq!(store.quantity_of(LocationKind::Sector, "4", "nuke"), 1);
    }
}
