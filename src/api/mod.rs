//! REST API over the calculator.
//!
//! Endpoints:
//! - `POST /estimate`: validate, estimate and project one submission
//! - `GET /reference`: base and appliance constants, tariff bounds, tips
//! - `GET /health`: liveness probe

mod error;
mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

pub use error::ApiError;
pub use types::EstimateRequest;

use crate::config::Settings;

/// Immutable application state shared across all request handlers.
///
/// Each request computes from its own body; the settings only supply the
/// default tariff and currency.
pub struct AppState {
    pub settings: Settings,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/estimate", post(handlers::post_estimate))
        .route("/reference", get(handlers::get_reference))
        .route("/health", get(handlers::get_health))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
