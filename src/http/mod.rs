//! Axum-based HTTP server exposing the exam store as a REST API.
//!
//! This layer contains no scheduling logic: handlers convert DTOs at the
//! boundary, call the store, and map its error taxonomy onto status codes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
