use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a [`KeyValueStorage`](crate::KeyValueStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

/// Which side of the persisted collection a failure happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Stored data was inaccessible or could not be parsed.
    StorageRead,
    /// The updated collection could not be persisted.
    StorageWrite,
}

#[derive(Debug, Error)]
pub enum ListStoreError {
    #[error("failed to read shopping lists: {0}")]
    Read(#[source] StorageError),
    #[error("stored shopping lists are corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to serialize shopping lists: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write shopping lists: {0}")]
    Write(#[source] StorageError),
    #[error("shopping list writer lock poisoned")]
    LockPoisoned,
    #[error("no unused id after {attempts} attempts")]
    IdCollision { attempts: usize },
}

impl ListStoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListStoreError::Read(_) | ListStoreError::Corrupt(_) => ErrorKind::StorageRead,
            ListStoreError::Serialize(_)
            | ListStoreError::Write(_)
            | ListStoreError::LockPoisoned
            | ListStoreError::IdCollision { .. } => ErrorKind::StorageWrite,
        }
    }
}
