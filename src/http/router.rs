//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Exam CRUD
        .route("/exams", get(handlers::list_exams).post(handlers::add_exam))
        .route("/exams/upcoming", get(handlers::upcoming_exams))
        .route("/exams/past", get(handlers::past_exams))
        .route(
            "/exams/{id}",
            get(handlers::get_exam)
                .put(handlers::update_exam)
                .delete(handlers::delete_exam),
        )
        // Index-backed listings
        .route("/modules/{module_code}/exams", get(handlers::exams_by_module))
        .route("/batches/{batch_id}/exams", get(handlers::exams_by_batch))
        // Pre-flight checks
        .route("/conflicts/check", post(handlers::check_conflict))
        .route(
            "/venues/{venue}/availability",
            get(handlers::venue_availability),
        )
        .route("/statistics", get(handlers::statistics));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
