//! Route handlers for the intake API.

pub mod health;
pub mod session;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Session endpoints
        .route("/start", post(session::start))
        .route("/reset", post(session::reset))
        .route("/chat", post(session::chat))
}
