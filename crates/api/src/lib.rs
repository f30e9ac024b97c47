//! REST API gateway for the Overseer delegation system.
//!
//! This crate exposes the supervisor over HTTP:
//!
//! - `GET /` - Service banner
//! - `GET /health` - Health check (healthy once the supervisor is running)
//! - `GET /status` - Full supervisor and registry status
//! - `POST /task/delegate` - Delegate a task to an agent by capability
//!
//! # Architecture
//!
//! ```text
//! Client
//!    │
//!    ▼
//! ┌─────────────────┐
//! │   API Gateway   │ ◄── This crate
//! │     (Axum)      │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐      ┌─────────────────┐
//! │   Supervisor    │ ───► │  Agent fleet    │
//! │  (delegation)   │      │  (specialists)  │
//! └─────────────────┘      └─────────────────┘
//! ```

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use state::AppState;

/// Create the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/status", get(routes::status))
        .route("/task/delegate", post(routes::delegate_task))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the API server on the given address, shutting down on ctrl-c.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let router = create_router(state);

    info!(%addr, "Starting Overseer API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
