//! Domain model types shared by the store, persistence and HTTP layers.

pub mod exam;
pub mod time;

pub use exam::{Exam, ExamId, ExamType};
pub use time::{overlaps, same_day, ClockTime, TimeFormatError};
