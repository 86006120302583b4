//! File-backed snapshot store.
//!
//! Snapshots are a single JSON document carrying the full exam table plus a
//! SHA-256 checksum of the exam payload. Writes go to a sibling `.tmp` file
//! first and are renamed into place, so readers only ever observe a complete
//! snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::checksum::calculate_checksum;
use super::{PersistenceError, PersistenceResult, SnapshotStore};
use crate::models::Exam;

/// On-disk snapshot envelope.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    /// SHA-256 of the serialized `exams` array.
    checksum: String,
    exams: Vec<Exam>,
}

/// Snapshot store writing JSON to a single file path.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> PersistenceResult<Vec<Exam>> {
        // A store that has never been saved is an empty store, not an error.
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let snapshot: SnapshotFile = serde_json::from_str(&content)?;

        let payload = serde_json::to_string(&snapshot.exams)?;
        if calculate_checksum(&payload) != snapshot.checksum {
            return Err(PersistenceError::Corrupt(format!(
                "checksum mismatch in {}",
                self.path.display()
            )));
        }

        Ok(snapshot.exams)
    }

    fn save(&self, exams: &[Exam]) -> PersistenceResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_string(exams)?;
        let snapshot = SnapshotFile {
            checksum: calculate_checksum(&payload),
            exams: exams.to_vec(),
        };

        let tmp = self.tmp_path();
        fs::write(&tmp, serde_json::to_vec_pretty(&snapshot)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
