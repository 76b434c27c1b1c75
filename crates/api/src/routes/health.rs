//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub engine_ready: bool,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let engine_ready = state.orchestrator.is_ready().await;
    Json(Health {
        status: "ok".to_string(),
        engine_ready,
    })
}
