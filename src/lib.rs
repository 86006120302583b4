//! # Exam Scheduler
//!
//! In-memory exam scheduling store with conflict detection and crash-safe
//! snapshot persistence, for planning examination sessions across academic
//! batches and venues.
//!
//! ## Guarantees
//!
//! - **No batch overlap**: a cohort never sits two exams at overlapping
//!   times on the same day.
//! - **No venue double-booking**: a room (case-insensitive) never hosts two
//!   exams at overlapping times on the same day.
//! - **Index consistency**: the module and batch indices always agree with
//!   the primary table; both are updated in one critical section.
//! - **Durability**: the full table is snapshotted after every mutation and
//!   restored at startup.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: the exam entity, identifiers, and clock-time handling
//! - [`store`]: the primary table, secondary indices, conflict detection
//!   and the mutation contracts
//! - [`persistence`]: the snapshot trait plus file-backed and in-memory
//!   backends
//! - [`config`]: server configuration from file and environment
//! - [`http`]: Axum-based REST server over the store (feature
//!   `http-server`)
//!
//! ## Example
//!
//! ```
//! use exam_scheduler::{ClockTime, Exam, ExamId, ExamStore, ExamType};
//!
//! let store = ExamStore::in_memory();
//! let exam = Exam {
//!     id: ExamId::new("EX-2031-001"),
//!     module_code: "CS101".to_string(),
//!     batch_id: "B1".to_string(),
//!     date: chrono::Local::now().date_naive(),
//!     start_time: ClockTime::parse("09:00").unwrap(),
//!     end_time: ClockTime::parse("11:00").unwrap(),
//!     venue: "Hall A".to_string(),
//!     max_marks: 100,
//!     exam_type: ExamType::Final,
//! };
//! store.add_exam(exam).unwrap();
//! assert_eq!(store.statistics().total, 1);
//! ```

pub mod config;
pub mod models;
pub mod persistence;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;

pub use config::{ConfigError, ServerConfig};
pub use models::{ClockTime, Exam, ExamId, ExamType, TimeFormatError};
pub use persistence::{
    FileSnapshotStore, MemorySnapshotStore, PersistenceError, SnapshotStore,
};
pub use store::{ConflictCheck, ExamStatistics, ExamStore, StoreError, StoreResult};
