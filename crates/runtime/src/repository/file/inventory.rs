//! File-based InventoryRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use orbital_core::InventoryStore;

use crate::repository::codec;
use crate::repository::{InventoryRepository, RepositoryError, Result};

/// Relative path of the inventory document below the data directory.
pub const STORAGE_RELATIVE_PATH: &str = "mods/airstrike-data/satellite_data.json";

/// File-based implementation of InventoryRepository.
///
/// # File Format
///
/// A single JSON document, see [`codec`]. Saves write `<file>.tmp` and rename
/// it over the document, so an interrupted save never truncates the previous
/// one.
pub struct FileInventoryRepository {
    path: PathBuf,
}

impl FileInventoryRepository {
    /// Repository backed by the document at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Repository backed by the standard document below `data_dir`.
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(STORAGE_RELATIVE_PATH))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Creates the parent directory of the document.
    ///
    /// Failure is only logged; the write that follows reports its own error.
    fn ensure_parent_dir(&self) {
        let Some(parent) = self.path.parent() else {
            return;
        };
        if parent.as_os_str().is_empty() || parent.is_dir() {
            return;
        }
        match fs::create_dir_all(parent) {
            Ok(()) => tracing::debug!("Created inventory directory {}", parent.display()),
            Err(err) => tracing::error!(
                "Failed to create inventory directory {}: {}",
                parent.display(),
                err
            ),
        }
    }
}

impl InventoryRepository for FileInventoryRepository {
    fn load(&self) -> Result<Option<InventoryStore>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(RepositoryError::Io(err)),
        };

        let store = codec::decode(&text)?;

        tracing::debug!("Loaded inventory from {}", self.path.display());

        Ok(Some(store))
    }

    fn save(&self, store: &InventoryStore) -> Result<()> {
        let text = codec::encode(store)?;

        self.ensure_parent_dir();

        // Write to temp file
        let temp_path = self.temp_path();
        if let Err(err) = fs::write(&temp_path, text) {
            match fs::remove_file(&temp_path) {
                Ok(()) => {}
                Err(cleanup) if cleanup.kind() == ErrorKind::NotFound => {}
                Err(cleanup) => tracing::warn!(
                    "Failed to remove temp file {}: {}",
                    temp_path.display(),
                    cleanup
                ),
            }
            return Err(RepositoryError::Io(err));
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved inventory ({} locations) to {}",
            store.location_count(),
            self.path.display()
        );

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
