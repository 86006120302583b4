//! In-memory snapshot store for unit testing and local development.

use parking_lot::Mutex;

use super::{PersistenceResult, SnapshotStore};
use crate::models::Exam;

/// Snapshot store that keeps the latest snapshot in memory.
///
/// Used where durability is irrelevant: tests, examples, and ephemeral
/// development servers.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    exams: Mutex<Vec<Exam>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of exams in the last saved snapshot.
    pub fn snapshot_len(&self) -> usize {
        self.exams.lock().len()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> PersistenceResult<Vec<Exam>> {
        Ok(self.exams.lock().clone())
    }

    fn save(&self, exams: &[Exam]) -> PersistenceResult<()> {
        *self.exams.lock() = exams.to_vec();
        Ok(())
    }
}
