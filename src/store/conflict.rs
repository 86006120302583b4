//! Schedule conflict detection.
//!
//! A candidate exam collides with a stored exam along two independent
//! dimensions:
//!
//! - **batch**: the same cohort cannot sit two exams at overlapping times
//!   on the same day;
//! - **venue**: the same room (case-insensitive) cannot host two exams at
//!   overlapping times on the same day.
//!
//! Detection is a linear scan over the full table. At course-catalog scale
//! (hundreds of exams, human-paced mutations) this is far cheaper than
//! maintaining per-day interval structures, and it keeps the check trivially
//! correct against the one consistent snapshot the store lock guarantees.

use crate::models::{overlaps, same_day, Exam, ExamId};

fn batch_collision(existing: &Exam, candidate: &Exam) -> bool {
    existing.batch_id == candidate.batch_id
        && same_day(existing.date, candidate.date)
        && overlaps(
            existing.start_time,
            existing.end_time,
            candidate.start_time,
            candidate.end_time,
        )
}

fn venue_collision(existing: &Exam, candidate: &Exam) -> bool {
    // Exams restored from older snapshots may carry an empty venue; those
    // never occupy a room.
    !existing.venue.is_empty()
        && !candidate.venue.is_empty()
        && existing.venue.to_lowercase() == candidate.venue.to_lowercase()
        && same_day(existing.date, candidate.date)
        && overlaps(
            existing.start_time,
            existing.end_time,
            candidate.start_time,
            candidate.end_time,
        )
}

/// Whether `candidate` collides with any exam in `exams`, skipping
/// `exclude` (an update being checked against its own stored version).
pub(crate) fn has_conflict<'a>(
    candidate: &Exam,
    exams: impl IntoIterator<Item = &'a Exam>,
    exclude: Option<&ExamId>,
) -> bool {
    exams
        .into_iter()
        .filter(|existing| Some(&existing.id) != exclude)
        .any(|existing| batch_collision(existing, candidate) || venue_collision(existing, candidate))
}

/// Collect a human-readable description of every collision, across both
/// dimensions and all colliding exams.
///
/// An exam that collides on both dimensions contributes two entries, so the
/// caller can always name the exact exams and rooms in the way.
pub(crate) fn conflict_details<'a>(
    candidate: &Exam,
    exams: impl IntoIterator<Item = &'a Exam>,
    exclude: Option<&ExamId>,
) -> Vec<String> {
    let mut details = Vec::new();
    for existing in exams {
        if Some(&existing.id) == exclude {
            continue;
        }
        if batch_collision(existing, candidate) {
            details.push(format!(
                "Batch conflict: {} for {}",
                existing.id, existing.module_code
            ));
        }
        if venue_collision(existing, candidate) {
            details.push(format!(
                "Venue conflict: {} at {}",
                existing.id, existing.venue
            ));
        }
    }
    details
}
