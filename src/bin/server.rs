//! Exam Scheduler HTTP Server Binary
//!
//! Entry point for the exam scheduling REST API. It loads configuration,
//! opens the store over its snapshot file, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin exam-server --features http-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `EXAM_DATA_FILE`: Snapshot file path (default: data/exams.json)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use exam_scheduler::http::{create_router, AppState};
use exam_scheduler::{ExamStore, FileSnapshotStore, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Exam Scheduler HTTP Server");

    let config = ServerConfig::load()?;

    let snapshot = FileSnapshotStore::new(&config.data_file);
    let store = Arc::new(ExamStore::open(Box::new(snapshot))?);
    info!(
        "Store opened with {} exams from {}",
        store.statistics().total,
        config.data_file.display()
    );

    let state = AppState::new(store);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
