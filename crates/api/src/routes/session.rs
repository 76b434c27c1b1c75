//! Session endpoints: start, reset, and chat.

use axum::extract::State;
use axum::Json;
use engine_core::Intent;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;

/// Response for `POST /start` and `POST /reset`.
#[derive(Debug, Serialize)]
pub struct OpeningResponse {
    pub assistant_message: String,
    pub session_id: String,
}

/// Request body for `POST /reset`.
#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub session_id: String,
}

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

/// Response for `POST /chat`.
///
/// `intent` is always `CONTINUE` at this boundary; analysis is internal
/// to an exchange.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub assistant_message: String,
    pub intent: Intent,
}

/// Create a session and return its opening greeting.
pub async fn start(State(state): State<AppState>) -> Result<Json<OpeningResponse>> {
    let opening = state.orchestrator.start().await?;

    Ok(Json(OpeningResponse {
        assistant_message: opening.assistant_message,
        session_id: opening.session_id,
    }))
}

/// Destroy the session (if present) and return a fresh one.
pub async fn reset(
    State(state): State<AppState>,
    Json(request): Json<ResetRequest>,
) -> Result<Json<OpeningResponse>> {
    let opening = state.orchestrator.reset(&request.session_id).await?;

    Ok(Json(OpeningResponse {
        assistant_message: opening.assistant_message,
        session_id: opening.session_id,
    }))
}

/// Run one exchange. An unknown session id behaves as an implicit start
/// using `message` as the first user turn.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let exchange = state
        .orchestrator
        .chat(&request.session_id, &request.message)
        .await?;

    Ok(Json(ChatResponse {
        assistant_message: exchange.assistant_message,
        intent: exchange.intent,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_wire_shape() {
        let response = ChatResponse {
            assistant_message: "Tell me more.".to_string(),
            intent: Intent::Continue,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["assistant_message"], "Tell me more.");
        assert_eq!(json["intent"], "CONTINUE");
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let request: ChatRequest = serde_json::from_str(
            r#"{"session_id": "S1", "message": "hello"}"#,
        )
        .unwrap();

        assert_eq!(request.session_id, "S1");
        assert_eq!(request.message, "hello");
    }
}
