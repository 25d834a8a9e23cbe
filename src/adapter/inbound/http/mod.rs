//! HTTP service: quote proxy, compensation endpoint, health check.

pub mod cache;
pub mod compensation;
pub mod error;
pub mod proxy;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{Error, Result};
use state::AppState;

/// Assemble the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/stock", get(proxy::missing_symbol))
        .route("/stock/", get(proxy::missing_symbol))
        .route("/stock/{symbol}", get(proxy::stock_quote))
        .route("/compensation", get(compensation::compensation))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `address` and serve until Ctrl-C.
pub async fn serve(address: &str, state: Arc<AppState>) -> Result<()> {
    let listener = TcpListener::bind(address).await?;
    let local = listener.local_addr()?;
    info!(address = %local, "vestcalc listening on http://{local}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Server(e.to_string()))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, gracefully stopping");
}
