use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The dictionary file is missing or unreadable. Fatal for a solve pass.
    #[error("cannot read dictionary source {origin}: {source}")]
    DictionarySource {
        origin: String,
        #[source]
        source: io::Error,
    },

    /// Recoverable: treated as a cache miss by the snapshot store
    #[error("snapshot {key} is missing or corrupt: {reason}")]
    SnapshotCorruptOrMissing { key: String, reason: String },

    /// Recoverable: the in-memory trie is still used
    #[error("failed to write snapshot {key}: {reason}")]
    SnapshotWriteFailure { key: String, reason: String },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("invalid configuration {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
