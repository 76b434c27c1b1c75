//! Ollama API request and response types.

use engine_core::ChatMessage;
use serde::{Deserialize, Serialize};

/// Chat request to the Ollama `/api/chat` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest {
    /// Model to use
    pub model: String,
    /// Messages in the conversation
    pub messages: Vec<ChatMessage>,
    /// Always false: the structured reply is consumed whole.
    pub stream: bool,
    /// Output format constraint ("json").
    pub format: String,
    /// Generation options.
    pub options: OllamaOptions,
}

/// Generation options.
#[derive(Debug, Clone, Serialize)]
pub struct OllamaOptions {
    /// Sampling temperature.
    pub temperature: f32,
}

/// Chat response from the Ollama `/api/chat` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaChatResponse {
    /// The generated message.
    pub message: OllamaResponseMessage,
    /// Whether generation finished.
    #[serde(default)]
    pub done: bool,
}

/// The message part of a chat response.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaResponseMessage {
    /// Role (always "assistant").
    pub role: String,
    /// Generated content; with `format: "json"` this is a JSON document.
    pub content: String,
}

/// Error body returned by Ollama on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaErrorResponse {
    /// Error message
    pub error: String,
}
