// error.rs — Error types for the store subsystem.

use std::path::PathBuf;

use thiserror::Error;

use quest_codec::FormatError;
use quest_goal::ValidationError;

/// An opaque I/O failure from the text storage collaborator.
///
/// The store never interprets these; they pass through to the caller
/// unchanged.
#[derive(Debug, Error)]
#[error("storage failure at {path}: {source}")]
pub struct StorageError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl StorageError {
    /// Whether the failure was a missing file. Frontends commonly treat
    /// a missing goals file as an empty store.
    pub fn is_not_found(&self) -> bool {
        self.source.kind() == std::io::ErrorKind::NotFound
    }
}

/// Errors surfaced by [`GoalStore`](crate::GoalStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A 1-based goal reference outside the current list. Nothing was
    /// mutated.
    #[error("no goal at index {index}: the list holds {len} goal(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Goal construction rejected its input; nothing was added.
    #[error("invalid goal: {0}")]
    Validation(#[from] ValidationError),

    /// Persisted text failed to decode; the store kept its previous
    /// contents.
    #[error("malformed goal file: {0}")]
    Format(#[from] FormatError),

    /// The storage collaborator failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
