//! Data Transfer Objects for the HTTP API.
//!
//! Requests carry dates and times as plain strings (`"YYYY-MM-DD"`,
//! `"HH:MM"`) and exam types by their wire names; conversion into the typed
//! domain model happens here, so every malformed field becomes a uniform
//! validation error rather than a serde rejection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ClockTime, Exam, ExamId, ExamType};
use crate::store::{ConflictCheck, StoreError};

/// Wire representation of one exam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamDto {
    pub id: String,
    pub module_code: String,
    pub batch_id: String,
    /// `"YYYY-MM-DD"`
    pub date: String,
    /// `"HH:MM"`, 24-hour clock
    pub start_time: String,
    /// `"HH:MM"`, 24-hour clock
    pub end_time: String,
    pub venue: String,
    pub max_marks: i64,
    /// `"MIDTERM"`, `"FINAL"` or `"PRACTICAL"`
    pub exam_type: String,
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| StoreError::validation(format!("invalid date {s:?}, expected YYYY-MM-DD")))
}

pub(crate) fn parse_time(s: &str) -> Result<ClockTime, StoreError> {
    ClockTime::parse(s).map_err(|err| StoreError::validation(err.to_string()))
}

impl TryFrom<ExamDto> for Exam {
    type Error = StoreError;

    fn try_from(dto: ExamDto) -> Result<Self, Self::Error> {
        let max_marks = u32::try_from(dto.max_marks)
            .map_err(|_| StoreError::validation("max_marks must be positive"))?;
        Ok(Exam {
            id: ExamId::new(dto.id),
            module_code: dto.module_code,
            batch_id: dto.batch_id,
            date: parse_date(&dto.date)?,
            start_time: parse_time(&dto.start_time)?,
            end_time: parse_time(&dto.end_time)?,
            venue: dto.venue,
            max_marks,
            exam_type: dto.exam_type.parse().map_err(StoreError::Validation)?,
        })
    }
}

impl From<Exam> for ExamDto {
    fn from(exam: Exam) -> Self {
        Self {
            id: exam.id.to_string(),
            module_code: exam.module_code,
            batch_id: exam.batch_id,
            date: exam.date.to_string(),
            start_time: exam.start_time.to_string(),
            end_time: exam.end_time.to_string(),
            venue: exam.venue,
            max_marks: i64::from(exam.max_marks),
            exam_type: exam.exam_type.as_str().to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of exams currently stored
    pub exams: usize,
}

/// Exam list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamListResponse {
    pub exams: Vec<ExamDto>,
    pub total: usize,
}

impl ExamListResponse {
    pub fn from_exams(exams: Vec<Exam>) -> Self {
        let exams: Vec<ExamDto> = exams.into_iter().map(Into::into).collect();
        let total = exams.len();
        Self { exams, total }
    }
}

/// Conflict check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictCheckResponse {
    pub has_conflict: bool,
    pub details: Vec<String>,
}

impl From<ConflictCheck> for ConflictCheckResponse {
    fn from(check: ConflictCheck) -> Self {
        Self {
            has_conflict: check.has_conflict,
            details: check.details,
        }
    }
}

/// Query parameters for the venue availability endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueAvailabilityQuery {
    /// `"YYYY-MM-DD"`
    pub date: String,
    /// `"HH:MM"`
    pub start: String,
    /// `"HH:MM"`
    pub end: String,
}

/// Venue availability response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueAvailabilityResponse {
    pub venue: String,
    pub date: String,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ExamDto {
        ExamDto {
            id: "E1".to_string(),
            module_code: "CS101".to_string(),
            batch_id: "B1".to_string(),
            date: "2031-05-12".to_string(),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            venue: "Hall A".to_string(),
            max_marks: 100,
            exam_type: "FINAL".to_string(),
        }
    }

    #[test]
    fn dto_converts_to_domain_and_back() {
        let exam = Exam::try_from(dto()).unwrap();
        assert_eq!(exam.exam_type, ExamType::Final);
        assert_eq!(exam.start_time, ClockTime::parse("09:00").unwrap());

        let back = ExamDto::from(exam);
        assert_eq!(back.date, "2031-05-12");
        assert_eq!(back.end_time, "11:00");
        assert_eq!(back.exam_type, "FINAL");
    }

    #[test]
    fn bad_date_is_a_validation_error() {
        let mut bad = dto();
        bad.date = "12/05/2031".to_string();
        assert!(matches!(
            Exam::try_from(bad),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn bad_time_is_a_validation_error() {
        let mut bad = dto();
        bad.start_time = "25:00".to_string();
        assert!(matches!(
            Exam::try_from(bad),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn negative_marks_are_a_validation_error() {
        let mut bad = dto();
        bad.max_marks = -5;
        assert!(matches!(
            Exam::try_from(bad),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn unknown_exam_type_is_a_validation_error() {
        let mut bad = dto();
        bad.exam_type = "VIVA".to_string();
        assert!(matches!(
            Exam::try_from(bad),
            Err(StoreError::Validation(_))
        ));
    }
}
