//! Snapshot persistence (save/restore) support.
//!
//! Converts the raster surface into an encoded PNG data URI, stores it under
//! a single durable key with locking and atomic replacement, and restores it
//! at startup and after every resize. The same codec backs the undo history
//! entries.

mod options;
mod snapshot;
mod storage;

pub use options::{DEFAULT_STATE_KEY, StorageOptions, options_from_config};
pub use snapshot::{DATA_URI_PREFIX, SnapshotError, decode_snapshot, encode_surface};
pub use storage::{FileStore, MemoryStore, SnapshotStore, StoreError};

#[cfg(test)]
mod tests;
