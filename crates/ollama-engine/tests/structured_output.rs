//! Integration tests for the Ollama engine against a mock HTTP server.
//!
//! No running Ollama instance is required.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use engine_core::{ChatMessage, EngineError, Intent, LanguageModel};
use ollama_engine::{OllamaEngine, OllamaEngineConfig};

fn engine_for(uri: &str) -> OllamaEngine {
    let config = OllamaEngineConfig::builder().api_url(uri).build();
    OllamaEngine::new(config).unwrap()
}

fn chat_body(content: serde_json::Value) -> serde_json::Value {
    json!({
        "model": "llama3.2:3b",
        "created_at": "2025-11-04T08:12:45.499127Z",
        "message": {
            "role": "assistant",
            "content": content.to_string()
        },
        "done": true
    })
}

#[tokio::test]
async fn test_interviewer_turn_parses_structured_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "model": "llama3.2:3b",
            "stream": false,
            "format": "json"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(json!({
            "assistant_message": "How long has this been going on?",
            "intent": "CONTINUE"
        }))))
        .mount(&server)
        .await;

    let engine = engine_for(&server.uri());
    let reply = engine
        .interviewer_turn(&[ChatMessage::user("I've been feeling low")])
        .await
        .unwrap();

    assert_eq!(reply.assistant_message, "How long has this been going on?");
    assert_eq!(reply.intent, Intent::Continue);
}

#[tokio::test]
async fn test_interviewer_turn_rejects_invalid_intent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(json!({
            "assistant_message": "hm",
            "intent": "PONDER"
        }))))
        .mount(&server)
        .await;

    let engine = engine_for(&server.uri());
    let result = engine.interviewer_turn(&[ChatMessage::user("hi")]).await;

    assert!(matches!(result, Err(EngineError::Malformed(_))));
}

#[tokio::test]
async fn test_reasoner_analysis_parses_findings() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({ "model": "nemotron-mini" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(json!({
            "emotional_themes": ["Persistent sadness for 2 months"],
            "stressors": ["Recent job loss"]
        }))))
        .mount(&server)
        .await;

    let engine = engine_for(&server.uri());
    let findings = engine
        .reasoner_analysis(&[ChatMessage::user("analysis prompt")])
        .await
        .unwrap();

    assert_eq!(findings.emotional_themes, vec!["Persistent sadness for 2 months"]);
    assert_eq!(findings.stressors, vec!["Recent job loss"]);
    // Categories absent from the output default to empty.
    assert!(findings.thinking_patterns.is_empty());
    assert!(findings.unclear_areas.is_empty());
}

#[tokio::test]
async fn test_server_error_maps_to_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "model not loaded" })),
        )
        .mount(&server)
        .await;

    let engine = engine_for(&server.uri());
    let result = engine.interviewer_turn(&[ChatMessage::user("hi")]).await;

    match result {
        Err(EngineError::Unavailable(msg)) => {
            assert!(msg.contains("model not loaded"));
        }
        other => panic!("Expected Unavailable, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_envelope_maps_to_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let engine = engine_for(&server.uri());
    let result = engine.interviewer_turn(&[ChatMessage::user("hi")]).await;

    assert!(matches!(result, Err(EngineError::Malformed(_))));
}

#[tokio::test]
async fn test_connection_failure_maps_to_unavailable() {
    // Nothing listens on this port.
    let engine = engine_for("http://127.0.0.1:9");
    let result = engine.interviewer_turn(&[ChatMessage::user("hi")]).await;

    match result {
        Err(EngineError::Unavailable(_)) | Err(EngineError::Timeout) => {}
        other => panic!("Expected Unavailable or Timeout, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_is_ready_reflects_server_health() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": [] })))
        .mount(&server)
        .await;

    assert!(engine_for(&server.uri()).is_ready().await);
    assert!(!engine_for("http://127.0.0.1:9").is_ready().await);
}
