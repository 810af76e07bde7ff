//! httpfs - Exposes a local directory tree over HTTP.

pub mod cli;
pub mod colors;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod ops;
pub mod resolve;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Builds the router: every path and method goes to the filesystem handler
pub fn app(state: Arc<state::AppState>) -> Router {
    Router::new()
        .fallback(handlers::handle_fs)
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(middleware::log_requests))
        .with_state(state)
}
