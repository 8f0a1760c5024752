//! # quest-store
//!
//! Goal store orchestration for the Quest tracker.
//!
//! [`GoalStore`] owns the ordered goal list and the score ledger and is
//! the single mutation path for both: creation, listing, progress
//! recording, and save/load. Persistence text moves through the
//! [`TextStorage`] collaborator; the store itself only produces and
//! consumes strings.
//!
//! ## Key components
//!
//! - [`GoalStore`] — owns goals and ledger, 1-based goal references
//! - [`TextStorage`] — raw text in/out by file name
//! - [`FsStorage`] — filesystem-backed implementation
//! - [`StoreError`] / [`StorageError`] — the failure surface

pub mod error;
pub mod storage;
pub mod store;

pub use error::{StorageError, StoreError};
pub use storage::{FsStorage, TextStorage};
pub use store::GoalStore;
