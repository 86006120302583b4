//! The exam entity and its identifier/category types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::ClockTime;

/// Caller-assigned, globally unique exam identifier.
///
/// The store never generates ids; uniqueness is enforced at insertion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamId(String);

impl ExamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExamId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ExamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Category of an examination sitting.
///
/// Serialized with the uppercase wire names (`"MIDTERM"`, `"FINAL"`,
/// `"PRACTICAL"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExamType {
    Midterm,
    Final,
    Practical,
}

impl ExamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Midterm => "MIDTERM",
            ExamType::Final => "FINAL",
            ExamType::Practical => "PRACTICAL",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MIDTERM" => Ok(ExamType::Midterm),
            "FINAL" => Ok(ExamType::Final),
            "PRACTICAL" => Ok(ExamType::Practical),
            other => Err(format!(
                "unknown exam type {other:?}, expected MIDTERM, FINAL or PRACTICAL"
            )),
        }
    }
}

/// One scheduled examination instance.
///
/// The identity (`id`) is immutable after creation; every other field is
/// replaced wholesale by an update. The date is day-granular and the time
/// window `[start_time, end_time)` is half-open, so back-to-back exams in
/// the same venue are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: ExamId,
    pub module_code: String,
    pub batch_id: String,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub venue: String,
    pub max_marks: u32,
    pub exam_type: ExamType,
}

impl Exam {
    /// Whether any conflict-relevant field differs from `other`.
    ///
    /// Updates that leave all of these untouched (marks, module, type
    /// changes) cannot introduce a schedule collision and skip the conflict
    /// scan.
    pub fn schedule_changed(&self, other: &Exam) -> bool {
        self.batch_id != other.batch_id
            || self.date != other.date
            || self.start_time != other.start_time
            || self.end_time != other.end_time
            || self.venue != other.venue
    }

    /// Sort key used by every listing operation.
    pub fn schedule_key(&self) -> (NaiveDate, ClockTime) {
        (self.date, self.start_time)
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} / {}] {} {}-{} @ {}",
            self.id,
            self.module_code,
            self.batch_id,
            self.date,
            self.start_time,
            self.end_time,
            self.venue
        )
    }
}
