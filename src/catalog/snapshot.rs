//! Versioned key-value persistence for catalog snapshots.
//!
//! A snapshot is the JSON-serialized catalog array stored under a key that
//! embeds the schema version. Bumping the version makes old snapshots invisible;
//! there is no migration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Schema version of the persisted catalog. Bump when the catalog resource changes shape.
pub const DEFAULT_SCHEMA_VERSION: &str = "v1";

const SNAPSHOT_KEY_PREFIX: &str = "stl_monsters";

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot key: {0}")]
    InvalidKey(String),

    #[error("Snapshot store is unavailable")]
    Unavailable,
}

/// Key of the snapshot slot for a schema version
#[must_use]
pub fn snapshot_key(schema_version: &str) -> String {
    format!("{SNAPSHOT_KEY_PREFIX}_{schema_version}")
}

/// Local key-value storage for snapshots
pub trait SnapshotStore: Send + Sync {
    /// Read a slot; a missing slot is `Ok(None)`
    fn read(&self, key: &str) -> Result<Option<String>, SnapshotError>;

    /// Write a slot, replacing any previous value
    fn write(&self, key: &str, value: &str) -> Result<(), SnapshotError>;

    /// Remove a slot; removing a missing slot is not an error
    fn remove(&self, key: &str) -> Result<(), SnapshotError>;
}

/// Stores each slot as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct DirectorySnapshotStore {
    dir: PathBuf,
}

impl DirectorySnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, SnapshotError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(SnapshotError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SnapshotStore for DirectorySnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        let path = self.slot_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let path = self.slot_path(key)?;
        std::fs::create_dir_all(&self.dir)?;

        // Write to a sibling file first so a crash never leaves a torn snapshot
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SnapshotError> {
        let path = self.slot_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store; nothing survives the process
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        let slots = self.slots.lock().map_err(|_| SnapshotError::Unavailable)?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let mut slots = self.slots.lock().map_err(|_| SnapshotError::Unavailable)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SnapshotError> {
        let mut slots = self.slots.lock().map_err(|_| SnapshotError::Unavailable)?;
        slots.remove(key);
        Ok(())
    }
}
