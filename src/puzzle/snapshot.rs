use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::trie::Trie;
use crate::error::{Error, Result};
use crate::utils::serialization;

/// Persists a built trie so the dictionary does not have to be parsed on every run.
/// The encoding is private to each store.
pub trait SnapshotStore {
    /// Loads the snapshot stored under `key`. Missing or undecodable snapshots
    /// surface as `Error::SnapshotCorruptOrMissing`.
    fn try_load(&self, key: &str) -> Result<Trie>;

    fn save(&self, key: &str, trie: &Trie) -> Result<()>;

    /// Cache lookup: any failure is logged and reported as a miss
    fn load(&self, key: &str) -> Option<Trie> {
        match self.try_load(key) {
            Ok(trie) => {
                debug!("loaded trie snapshot {}", key);
                Some(trie)
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }
}

/// Bincode snapshots on disk, one file per key under `root`
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    root: PathBuf,
}

impl FileSnapshotStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn try_load(&self, key: &str) -> Result<Trie> {
        serialization::load_from_disk(self.path_for(key)).map_err(|e| Error::SnapshotCorruptOrMissing {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn save(&self, key: &str, trie: &Trie) -> Result<()> {
        serialization::save_to_disk(trie, self.path_for(key)).map_err(|e| Error::SnapshotWriteFailure {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Keeps encoded snapshots in memory. Useful as a process-local cache and in tests.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    entries: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw bytes under `key` without checking them
    pub fn put_raw(&self, key: &str, bytes: Vec<u8>) {
        self.entries.borrow_mut().insert(key.to_string(), bytes);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn try_load(&self, key: &str) -> Result<Trie> {
        let entries = self.entries.borrow();
        let bytes = entries.get(key).ok_or_else(|| Error::SnapshotCorruptOrMissing {
            key: key.to_string(),
            reason: "no such snapshot".to_string(),
        })?;
        serialization::deserialize_bytes(bytes).map_err(|e| Error::SnapshotCorruptOrMissing {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn save(&self, key: &str, trie: &Trie) -> Result<()> {
        let bytes = serialization::serialize_bytes(trie).map_err(|e| Error::SnapshotWriteFailure {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.put_raw(key, bytes);
        Ok(())
    }
}
