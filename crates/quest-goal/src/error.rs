// error.rs — Error types for goal construction and event dispatch.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected goal construction input.
///
/// A rejected goal never reaches the store; the caller can correct the
/// input and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The goal name was empty.
    #[error("goal name must not be empty")]
    EmptyName,

    /// The checklist target was zero.
    #[error("checklist target must be at least 1")]
    ZeroTarget,

    /// The checklist bonus was negative.
    #[error("checklist bonus must not be negative, got {0}")]
    NegativeBonus(i64),
}

/// A notification sink failed to record an event (non-fatal).
#[derive(Debug, Error)]
pub enum EventError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize event data.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
