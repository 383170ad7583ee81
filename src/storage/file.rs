//! FileStorage - one JSON file per key under a root directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::KeyValueStorage;
use crate::error::StorageError;

/// File-backed key-value storage.
///
/// Each key maps to `<root>/<key>.json`. Writes go to a temp file in the same
/// directory which is then renamed over the target, so the file on disk is
/// always either the previous or the new value.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStorage { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn atomic_write(&self, path: &Path, data: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|source| io_err(&self.root, source))?;

        let mut temp =
            NamedTempFile::new_in(&self.root).map_err(|source| io_err(&self.root, source))?;
        temp.write_all(data)
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|source| io_err(temp.path(), source))?;
        temp.persist(path).map_err(|e| io_err(path, e.error))?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(io_err(&path, source)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        self.atomic_write(&path, value.as_bytes())?;
        debug!(path = %path.display(), bytes = value.len(), "wrote storage file");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(io_err(&path, source)),
        }
    }
}

fn io_err(path: &Path, source: io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}
