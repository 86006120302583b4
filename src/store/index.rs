//! Secondary indices over the primary exam table.
//!
//! Two mappings (module code to exam ids, batch id to exam ids) are
//! maintained in the same critical section as every primary-table mutation,
//! so the index never references an id absent from the table. Empty buckets
//! are dropped on removal, which keeps the distinct-module/batch statistics
//! honest.

use std::collections::{HashMap, HashSet};

use crate::models::{Exam, ExamId};

#[derive(Debug, Default)]
pub(crate) struct ExamIndex {
    by_module: HashMap<String, HashSet<ExamId>>,
    by_batch: HashMap<String, HashSet<ExamId>>,
}

impl ExamIndex {
    /// Rebuild the whole index from a table's exams, used after a snapshot
    /// load. The index itself is never persisted.
    pub fn rebuild<'a>(exams: impl IntoIterator<Item = &'a Exam>) -> Self {
        let mut index = Self::default();
        for exam in exams {
            index.insert(exam);
        }
        index
    }

    pub fn insert(&mut self, exam: &Exam) {
        self.by_module
            .entry(exam.module_code.clone())
            .or_default()
            .insert(exam.id.clone());
        self.by_batch
            .entry(exam.batch_id.clone())
            .or_default()
            .insert(exam.id.clone());
    }

    pub fn remove(&mut self, exam: &Exam) {
        remove_from_bucket(&mut self.by_module, &exam.module_code, &exam.id);
        remove_from_bucket(&mut self.by_batch, &exam.batch_id, &exam.id);
    }

    /// Move an exam between buckets after an update. Each dimension is a
    /// no-op when its key did not change.
    pub fn reindex(&mut self, old: &Exam, new: &Exam) {
        if old.module_code != new.module_code {
            remove_from_bucket(&mut self.by_module, &old.module_code, &old.id);
            self.by_module
                .entry(new.module_code.clone())
                .or_default()
                .insert(new.id.clone());
        }
        if old.batch_id != new.batch_id {
            remove_from_bucket(&mut self.by_batch, &old.batch_id, &old.id);
            self.by_batch
                .entry(new.batch_id.clone())
                .or_default()
                .insert(new.id.clone());
        }
    }

    pub fn module_ids(&self, module_code: &str) -> Option<&HashSet<ExamId>> {
        self.by_module.get(module_code)
    }

    pub fn batch_ids(&self, batch_id: &str) -> Option<&HashSet<ExamId>> {
        self.by_batch.get(batch_id)
    }

    pub fn distinct_modules(&self) -> usize {
        self.by_module.len()
    }

    pub fn distinct_batches(&self) -> usize {
        self.by_batch.len()
    }

    /// Whether `id` is present in exactly the buckets for `exam`'s keys.
    #[cfg(test)]
    pub fn is_consistent_for(&self, exam: &Exam) -> bool {
        let in_module = self
            .by_module
            .get(&exam.module_code)
            .is_some_and(|ids| ids.contains(&exam.id));
        let in_batch = self
            .by_batch
            .get(&exam.batch_id)
            .is_some_and(|ids| ids.contains(&exam.id));
        let stray = self
            .by_module
            .iter()
            .any(|(code, ids)| code != &exam.module_code && ids.contains(&exam.id))
            || self
                .by_batch
                .iter()
                .any(|(batch, ids)| batch != &exam.batch_id && ids.contains(&exam.id));
        in_module && in_batch && !stray
    }
}

fn remove_from_bucket(
    buckets: &mut HashMap<String, HashSet<ExamId>>,
    key: &str,
    id: &ExamId,
) {
    if let Some(ids) = buckets.get_mut(key) {
        ids.remove(id);
        if ids.is_empty() {
            buckets.remove(key);
        }
    }
}
