//! Error types for the intake API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use engine_core::EngineError;
use orchestrator::OrchestratorError;
use thiserror::Error;

/// Errors surfaced by the intake API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An exchange failed.
    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Orchestrator(err) = self;

        let (status, message) = match &err {
            OrchestratorError::EmptyMessage => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            OrchestratorError::Engine(engine_err) => {
                let status = match engine_err {
                    EngineError::Unavailable(_) | EngineError::Timeout => {
                        tracing::warn!("Capability unavailable: {}", engine_err);
                        StatusCode::SERVICE_UNAVAILABLE
                    }
                    EngineError::Malformed(_) => {
                        tracing::error!("Malformed capability output: {}", engine_err);
                        StatusCode::BAD_GATEWAY
                    }
                    EngineError::Configuration(_) => {
                        tracing::error!("Capability misconfigured: {}", engine_err);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, engine_err.to_string())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
