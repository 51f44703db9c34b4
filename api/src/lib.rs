//! HTTP facade: wires the support system and exposes it over axum.

mod core;
mod error_handler;
mod routes;

pub use error_handler::{AppError, AppResult};

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::core::app_state::AppState;
use crate::routes::health::health_route::health_check;
use crate::routes::query::query_route::query;

/// Builds application state, binds the listener, and serves until Ctrl+C.
///
/// # Errors
/// Startup failures (unreachable Qdrant or model endpoint, bad config,
/// bind errors) abort before the server accepts traffic.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::init().await?);

    let app = Router::new()
        .route("/query", post(query))
        .route("/health", get(health_check))
        .with_state(state);

    let addr = std::env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;
    info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
}
