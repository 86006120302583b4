//! The exam scheduling store.
//!
//! One [`ExamStore`] owns the primary exam table (id → exam), the secondary
//! indices, and the snapshot backend. Every public operation, reads
//! included, takes the single store-wide lock for its full duration, so
//! each operation observes one consistent table and the conflict scan never
//! races a mutation. The trade of read parallelism for linearizability is
//! intentional: request volume is administrative and human-paced.
//!
//! Mutations validate, check conflicts, update table and indices inside the
//! critical section, then write the snapshot before releasing the lock. A
//! failed snapshot write is logged and does not undo the in-memory
//! mutation.
//!
//! The store is constructed explicitly by the composition root and shared
//! behind an `Arc`; there is no process-global instance.

mod conflict;
mod error;
mod index;
mod validate;

pub use error::{StoreError, StoreResult};

use chrono::{Local, NaiveDate};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{overlaps, same_day, ClockTime, Exam, ExamId};
use crate::persistence::{PersistenceError, SnapshotStore};
use index::ExamIndex;

/// Outcome of a pre-flight conflict check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictCheck {
    pub has_conflict: bool,
    /// One entry per collision, naming the colliding exam and dimension.
    pub details: Vec<String>,
}

/// Live counts over the current table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamStatistics {
    pub total: usize,
    pub upcoming: usize,
    pub past: usize,
    pub distinct_modules: usize,
    pub distinct_batches: usize,
}

struct StoreInner {
    exams: HashMap<ExamId, Exam>,
    index: ExamIndex,
    snapshot: Box<dyn SnapshotStore>,
}

impl StoreInner {
    /// Write the current table to the snapshot backend.
    ///
    /// Called after every successful mutation, still under the store lock.
    /// Failures are logged and swallowed: the in-memory mutation has
    /// already happened and callers have been promised its result.
    fn persist(&self) {
        let mut exams: Vec<Exam> = self.exams.values().cloned().collect();
        // Deterministic snapshot order keeps the file diffable and the
        // checksum stable for identical tables.
        exams.sort_by(|a, b| a.id.cmp(&b.id));
        if let Err(err) = self.snapshot.save(&exams) {
            log::error!("failed to write exam snapshot: {err}");
        }
    }
}

/// In-memory exam store with secondary indices and snapshot persistence.
pub struct ExamStore {
    inner: Mutex<StoreInner>,
}

impl ExamStore {
    /// Open a store over the given snapshot backend, restoring any exams
    /// from its latest snapshot.
    ///
    /// A backend that has never been written yields an empty store. An
    /// unreadable or corrupt snapshot is returned as an error; the caller
    /// decides whether to abort or start over with a fresh backend.
    pub fn open(snapshot: Box<dyn SnapshotStore>) -> Result<Self, PersistenceError> {
        let loaded = snapshot.load()?;
        log::info!("loaded {} exams from snapshot", loaded.len());

        let mut exams = HashMap::with_capacity(loaded.len());
        for exam in loaded {
            exams.insert(exam.id.clone(), exam);
        }
        let index = ExamIndex::rebuild(exams.values());

        Ok(Self {
            inner: Mutex::new(StoreInner {
                exams,
                index,
                snapshot,
            }),
        })
    }

    /// Empty store over an in-memory snapshot backend.
    pub fn in_memory() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                exams: HashMap::new(),
                index: ExamIndex::default(),
                snapshot: Box::new(crate::persistence::MemorySnapshotStore::new()),
            }),
        }
    }

    /// Insert a new exam.
    ///
    /// Fails with `Validation` on malformed fields or a past date,
    /// `DuplicateId` if the id is taken, and `Conflict` (carrying every
    /// collision description) if the schedule collides with any stored
    /// exam. On success the stored copy is returned.
    pub fn add_exam(&self, exam: Exam) -> StoreResult<Exam> {
        let mut inner = self.inner.lock();

        validate::validate_exam(&exam, today())?;
        if inner.exams.contains_key(&exam.id) {
            return Err(StoreError::DuplicateId(exam.id));
        }
        if conflict::has_conflict(&exam, inner.exams.values(), None) {
            let details = conflict::conflict_details(&exam, inner.exams.values(), None);
            return Err(StoreError::Conflict(details));
        }

        inner.index.insert(&exam);
        inner.exams.insert(exam.id.clone(), exam.clone());
        inner.persist();
        Ok(exam)
    }

    /// Fetch a copy of one exam.
    pub fn get_exam(&self, id: &ExamId) -> StoreResult<Exam> {
        let inner = self.inner.lock();
        inner
            .exams
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Copies of every stored exam, ordered by id.
    pub fn all_exams(&self) -> Vec<Exam> {
        let inner = self.inner.lock();
        let mut exams: Vec<Exam> = inner.exams.values().cloned().collect();
        exams.sort_by(|a, b| a.id.cmp(&b.id));
        exams
    }

    /// Exams for one module, ascending by `(date, start_time)`.
    ///
    /// The index restricts the fetch to the module's bucket; an unknown
    /// module yields an empty list.
    pub fn exams_by_module(&self, module_code: &str) -> Vec<Exam> {
        let inner = self.inner.lock();
        let mut exams: Vec<Exam> = inner
            .index
            .module_ids(module_code)
            .into_iter()
            .flatten()
            .filter_map(|id| inner.exams.get(id).cloned())
            .collect();
        exams.sort_by_key(Exam::schedule_key);
        exams
    }

    /// Exams for one batch, ascending by `(date, start_time)`.
    pub fn exams_by_batch(&self, batch_id: &str) -> Vec<Exam> {
        let inner = self.inner.lock();
        let mut exams: Vec<Exam> = inner
            .index
            .batch_ids(batch_id)
            .into_iter()
            .flatten()
            .filter_map(|id| inner.exams.get(id).cloned())
            .collect();
        exams.sort_by_key(Exam::schedule_key);
        exams
    }

    /// Replace a stored exam wholesale.
    ///
    /// Validation matches `add_exam`. The conflict scan runs only when a
    /// schedule-relevant field (batch, date, times, venue) changed, and
    /// always excludes the exam's own id. Module or batch changes move the
    /// exam between index buckets.
    pub fn update_exam(&self, exam: Exam) -> StoreResult<Exam> {
        let mut inner = self.inner.lock();

        validate::validate_exam(&exam, today())?;
        let old = inner
            .exams
            .get(&exam.id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(exam.id.clone()))?;

        if exam.schedule_changed(&old)
            && conflict::has_conflict(&exam, inner.exams.values(), Some(&exam.id))
        {
            let details = conflict::conflict_details(&exam, inner.exams.values(), Some(&exam.id));
            return Err(StoreError::Conflict(details));
        }

        inner.index.reindex(&old, &exam);
        inner.exams.insert(exam.id.clone(), exam.clone());
        inner.persist();
        Ok(exam)
    }

    /// Remove an exam from the table and both index buckets.
    ///
    /// Deleting an absent id is `NotFound` and leaves the store untouched,
    /// so a repeated delete is harmless.
    pub fn delete_exam(&self, id: &ExamId) -> StoreResult<()> {
        let mut inner = self.inner.lock();
        let exam = inner
            .exams
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        inner.index.remove(&exam);
        inner.persist();
        Ok(())
    }

    /// Exams dated today or later, ascending by `(date, start_time)`.
    ///
    /// "Today" is wall-clock at call time; the same store answers
    /// differently on different days.
    pub fn upcoming_exams(&self) -> Vec<Exam> {
        let today = today();
        let inner = self.inner.lock();
        let mut exams: Vec<Exam> = inner
            .exams
            .values()
            .filter(|e| e.date >= today)
            .cloned()
            .collect();
        exams.sort_by_key(Exam::schedule_key);
        exams
    }

    /// Exams dated strictly before today, most recent first.
    pub fn past_exams(&self) -> Vec<Exam> {
        let today = today();
        let inner = self.inner.lock();
        let mut exams: Vec<Exam> = inner
            .exams
            .values()
            .filter(|e| e.date < today)
            .cloned()
            .collect();
        exams.sort_by_key(Exam::schedule_key);
        exams.reverse();
        exams
    }

    /// Whether a venue is free for the whole window `[start, end)` on
    /// `date`. Pre-flight check; no candidate exam or exclusion involved.
    pub fn is_venue_available(
        &self,
        venue: &str,
        date: NaiveDate,
        start: ClockTime,
        end: ClockTime,
    ) -> bool {
        let venue_lower = venue.to_lowercase();
        let inner = self.inner.lock();
        !inner.exams.values().any(|e| {
            !e.venue.is_empty()
                && e.venue.to_lowercase() == venue_lower
                && same_day(e.date, date)
                && overlaps(e.start_time, e.end_time, start, end)
        })
    }

    /// Run the conflict scan for a candidate without mutating anything.
    ///
    /// Unlike `add_exam` this does not validate fields or exclude any id;
    /// it answers exactly "would this schedule collide right now".
    pub fn check_conflict(&self, candidate: &Exam) -> ConflictCheck {
        let inner = self.inner.lock();
        let details = conflict::conflict_details(candidate, inner.exams.values(), None);
        ConflictCheck {
            has_conflict: !details.is_empty(),
            details,
        }
    }

    /// Live counts over the current table; nothing is cached.
    pub fn statistics(&self) -> ExamStatistics {
        let today = today();
        let inner = self.inner.lock();
        let upcoming = inner.exams.values().filter(|e| e.date >= today).count();
        ExamStatistics {
            total: inner.exams.len(),
            upcoming,
            past: inner.exams.len() - upcoming,
            distinct_modules: inner.index.distinct_modules(),
            distinct_batches: inner.index.distinct_batches(),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
