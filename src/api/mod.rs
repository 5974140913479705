//! REST API over the dashboard engine.
//!
//! Read-only GET endpoints; every request recomputes its data:
//! - `/location/{postal_code}`: location record
//! - `/energy-series?hours=N&seed=S`: hourly energy series ending now
//! - `/marketplace?postal_code=X&seed=S`: seller listings
//! - `/quote?postal_code=X&amount=N`: green-energy order quote
//! - `/dashboard?user_type=T&postal_code=X&seed=S`: full dashboard view

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::config::AppConfig;

pub use types::ErrorResponse;

/// Immutable application state shared across all request handlers.
///
/// Holds configuration only; no locks needed since nothing is mutated.
pub struct AppState {
    /// Validated application configuration.
    pub config: AppConfig,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/location/{postal_code}", get(handlers::get_location))
        .route("/energy-series", get(handlers::get_energy_series))
        .route("/marketplace", get(handlers::get_marketplace))
        .route("/quote", get(handlers::get_quote))
        .route("/dashboard", get(handlers::get_dashboard))
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
