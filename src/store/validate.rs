//! Field validation for add/update requests.

use chrono::NaiveDate;

use super::error::{StoreError, StoreResult};
use crate::models::Exam;

fn require_non_blank(value: &str, field: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Validate every field of a candidate exam against the rules shared by
/// add and update.
///
/// `today` is the wall-clock date of the calling operation; exams dated
/// before it are rejected. An exam scheduled for today is accepted even if
/// its start time has already passed (the policy is day-granular).
pub(crate) fn validate_exam(exam: &Exam, today: NaiveDate) -> StoreResult<()> {
    require_non_blank(exam.id.as_str(), "id")?;
    require_non_blank(&exam.module_code, "module_code")?;
    require_non_blank(&exam.batch_id, "batch_id")?;
    require_non_blank(&exam.venue, "venue")?;

    if exam.start_time >= exam.end_time {
        return Err(StoreError::validation(format!(
            "start_time {} must be before end_time {}",
            exam.start_time, exam.end_time
        )));
    }

    if exam.max_marks == 0 {
        return Err(StoreError::validation("max_marks must be positive"));
    }

    if exam.date < today {
        return Err(StoreError::validation(format!(
            "date {} is in the past",
            exam.date
        )));
    }

    Ok(())
}
