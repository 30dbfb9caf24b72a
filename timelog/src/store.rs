//! Key-value persistence for the serialized state blob.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

use crate::error::StoreError;

/// Key the blob is stored under.
pub const DEFAULT_KEY: &str = "tl-data";

/// Persistence capability consumed by the tracker. Holds a single blob.
pub trait Store: Send + Sync + 'static {
    fn save(&self, blob: &str) -> Result<(), StoreError>;

    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<String>, StoreError>;

    fn clear(&self) -> Result<(), StoreError>;
}

/// Stores the blob as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", key)),
        }
    }

    /// `<data dir>/timelog/tl-data.json`.
    pub fn in_default_dir() -> Result<Self, StoreError> {
        Ok(Self::new(default_data_dir()?, DEFAULT_KEY))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn default_data_dir() -> Result<PathBuf, StoreError> {
    Ok(dirs::data_dir()
        .ok_or(StoreError::NoDataDir)?
        .join("timelog"))
}

fn secure_write(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

impl Store for FileStore {
    fn save(&self, blob: &str) -> Result<(), StoreError> {
        secure_write(&self.path, blob).map_err(|e| StoreError::io(&self.path, e))
    }

    fn load(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| StoreError::io(&self.path, e))
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        }
        Ok(())
    }
}

/// In-process store. Clones share the same blob.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned slot still holds a usable blob.
        self.blob.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Store for MemoryStore {
    fn save(&self, blob: &str) -> Result<(), StoreError> {
        *self.slot() = Some(blob.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot().clone())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.slot().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"), DEFAULT_KEY);

        assert_eq!(store.load().unwrap(), None);
        store.save(r#"{"saved":[],"current":null}"#).unwrap();
        assert_eq!(
            store.load().unwrap().as_deref(),
            Some(r#"{"saved":[],"current":null}"#)
        );
        assert!(store.path().ends_with("nested/tl-data.json"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn file_store_writes_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), DEFAULT_KEY);
        store.save("{}").unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn memory_store_clones_share_blob() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save("blob").unwrap();
        assert_eq!(other.load().unwrap().as_deref(), Some("blob"));
        other.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
