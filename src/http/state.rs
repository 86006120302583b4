//! Application state for the HTTP server.

use std::sync::Arc;

use crate::store::ExamStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The one store instance owned by the process.
    pub store: Arc<ExamStore>,
}

impl AppState {
    pub fn new(store: Arc<ExamStore>) -> Self {
        Self { store }
    }
}
