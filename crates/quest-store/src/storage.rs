// storage.rs — Text in/out collaborator for persisted goal files.
//
// The store core only produces and consumes text; implementations of
// TextStorage decide where that text lives.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Reads and writes whole text files by name.
pub trait TextStorage {
    /// Return the full contents of the named file.
    fn read_text(&self, name: &str) -> Result<String, StorageError>;

    /// Persist `text` as the full contents of the named file.
    fn write_text(&self, name: &str, text: &str) -> Result<(), StorageError>;
}

/// Filesystem-backed storage rooted at a base directory.
///
/// Names resolve relative to the base directory; an absolute name is
/// used as given.
#[derive(Debug)]
pub struct FsStorage {
    base_dir: PathBuf,
}

impl FsStorage {
    /// Create a storage rooted at `base_dir`, creating the directory if
    /// it doesn't exist.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(|source| StorageError {
            path: base_dir.clone(),
            source,
        })?;
        Ok(Self { base_dir })
    }

    /// Full path of the named file.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }
}

impl TextStorage for FsStorage {
    fn read_text(&self, name: &str) -> Result<String, StorageError> {
        let path = self.file_path(name);
        fs::read_to_string(&path).map_err(|source| StorageError { path, source })
    }

    fn write_text(&self, name: &str, text: &str) -> Result<(), StorageError> {
        let path = self.file_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, text).map_err(|source| StorageError { path, source })
    }
}
