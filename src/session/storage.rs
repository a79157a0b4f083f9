//! Snapshot storage backends.
//!
//! The pad persists exactly one value: the encoded snapshot of the surface
//! as of the last completed mutation. [`SnapshotStore`] abstracts where that
//! value lives so the core stays testable; [`FileStore`] is the durable
//! implementation (one file per key, locked and atomically replaced), and
//! [`MemoryStore`] backs tests and doc examples.

use fs2::FileExt;
use log::warn;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::options::StorageOptions;

/// Errors from reading or writing the persisted snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying filesystem failure.
    #[error("snapshot storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable key-value storage for the single persisted snapshot.
///
/// An absent value is a normal empty case, not an error.
pub trait SnapshotStore {
    /// Reads the persisted snapshot, if one exists.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Writes the snapshot, overwriting any prior value.
    fn save(&mut self, snapshot: &str) -> Result<(), StoreError>;

    /// Deletes the persisted snapshot so the next load finds nothing.
    fn remove(&mut self) -> Result<(), StoreError>;
}

/// File-backed store: the snapshot lives in one file under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    options: StorageOptions,
}

impl FileStore {
    /// Creates a store over the given options. The base directory is created
    /// lazily on first save.
    pub fn new(options: StorageOptions) -> Self {
        Self { options }
    }

    /// The path holding the persisted value.
    pub fn state_file_path(&self) -> PathBuf {
        self.options.state_file_path()
    }

    fn with_lock<T>(
        &self,
        exclusive: bool,
        body: impl FnOnce() -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let lock_path = self.options.lock_file_path();
        let lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;
        if exclusive {
            lock_file.lock_exclusive()?;
        } else {
            lock_file.lock_shared()?;
        }

        let result = body();

        lock_file.unlock().unwrap_or_else(|err| {
            warn!("failed to unlock {}: {}", lock_path.display(), err);
        });

        result
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let path = self.options.state_file_path();
        if !path.exists() {
            log::debug!("no persisted snapshot at {}", path.display());
            return Ok(None);
        }

        self.with_lock(false, || {
            let value = fs::read_to_string(&path)?;
            Ok(Some(value))
        })
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.options.base_dir)?;

        let path = self.options.state_file_path();
        self.with_lock(true, || {
            let tmp_path = temp_path(&path);
            {
                let mut tmp_file = OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&tmp_path)?;
                tmp_file.write_all(snapshot.as_bytes())?;
                tmp_file.sync_all()?;
            }
            fs::rename(&tmp_path, &path)?;
            log::debug!("snapshot saved to {} ({} bytes)", path.display(), snapshot.len());
            Ok(())
        })
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        let path = self.options.state_file_path();
        if !path.exists() {
            return Ok(());
        }

        self.with_lock(true, || {
            // Re-check under the lock; another writer may have raced us.
            if path.exists() {
                fs::remove_file(&path)?;
                log::debug!("removed persisted snapshot {}", path.display());
            }
            Ok(())
        })
    }
}

fn temp_path(target: &Path) -> PathBuf {
    let mut candidate = target.with_extension("b64.tmp");
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_extension(format!("b64.tmp{}", counter));
    }
    candidate
}

/// In-process store used by tests and documentation examples.
///
/// # Examples
///
/// ```
/// use inkpad::session::{MemoryStore, SnapshotStore};
///
/// let mut store = MemoryStore::default();
/// store.save("data:image/png;base64,AAAA").unwrap();
/// assert!(store.load().unwrap().is_some());
/// store.remove().unwrap();
/// assert!(store.load().unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    /// Direct read of the stored value, for assertions.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StoreError> {
        self.value = Some(snapshot.to_string());
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        self.value = None;
        Ok(())
    }
}
