//! Ollama-backed structured generation engine.
//!
//! Implements [`engine_core::LanguageModel`] against a local Ollama
//! server. Both model roles go through the same `/api/chat` endpoint with
//! `format: "json"`; the returned content is parsed strictly into the
//! typed outputs - a reply that does not match the expected shape is a
//! malformed-output error, never a coerced partial value.

mod api_types;
mod config;
mod engine;
pub mod prompts;

pub use api_types::{
    OllamaChatRequest, OllamaChatResponse, OllamaErrorResponse, OllamaOptions,
    OllamaResponseMessage,
};
pub use config::{OllamaEngineConfig, OllamaEngineConfigBuilder};
pub use engine::OllamaEngine;
