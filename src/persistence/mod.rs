//! Durable persistence for the exam table.
//!
//! The store persists its entire primary table as one snapshot after every
//! successful mutation and reloads it at startup. The snapshot format is
//! owned by this module and opaque to the store; [`SnapshotStore`] is the
//! seam that lets tests and local development swap the file-backed
//! implementation for an in-memory one.

pub mod checksum;
pub mod file;
pub mod memory;

pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;

use crate::models::Exam;

/// Result type for snapshot operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Error type for snapshot load/save failures.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The snapshot was readable but its content failed an integrity check.
    #[error("snapshot corrupt: {0}")]
    Corrupt(String),
}

/// Backend that can persist and restore the full exam table.
///
/// `save` must be atomic from the reader's point of view: a crash mid-write
/// leaves either the previous snapshot or the new one, never a torn file.
/// `load` on a backend that has never been written returns an empty table.
pub trait SnapshotStore: Send {
    /// Restore every exam from the latest snapshot.
    fn load(&self) -> PersistenceResult<Vec<Exam>>;

    /// Replace the snapshot with the given table contents.
    fn save(&self, exams: &[Exam]) -> PersistenceResult<()>;
}
