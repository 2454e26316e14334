//! BitRent gateway
//!
//! Small REST surface for the BitRent frontend. Property and ownership queries
//! become read-only contract calls against a Stacks node; signed transactions
//! are relayed to the node's broadcast endpoint.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::GatewayConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        // Read-only contract queries
        .route("/api/property/:id/info", get(routes::property_info))
        .route("/api/user/:principal/fractions", get(routes::user_fractions))
        .route("/api/property/:id/revenue", get(routes::property_revenue))
        // Transaction relay
        .route("/api/tx/broadcast", post(routes::broadcast))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
