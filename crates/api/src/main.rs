//! HTTP boundary for the Aiden intake service.
//!
//! Wires the Ollama engine, the Chroma retriever, and the in-memory
//! session store into the orchestrator and exposes the session endpoints.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use chroma_retriever::ChromaRetriever;
use engine_core::MemorySessionStore;
use ollama_engine::OllamaEngine;
use orchestrator::{MinimumExchanges, Orchestrator};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting intake API server");

    // Build capability adapters and the session store
    let engine = OllamaEngine::from_env()?;
    let retriever = ChromaRetriever::from_env()?;
    let store = MemorySessionStore::new();

    // Build the orchestrator
    let mut orchestrator = Orchestrator::new(
        Arc::new(engine),
        Arc::new(retriever),
        Arc::new(store),
    )
    .with_retrieval_k(config.retrieval_k);

    if let Some(min_user_turns) = config.min_user_turns {
        orchestrator = orchestrator.with_policy(MinimumExchanges::new(min_user_turns));
    }

    // Build application state
    let state = AppState::new(Arc::new(orchestrator));

    // Build router; clients are browsers served from elsewhere, so CORS
    // is fully permissive.
    let app = routes::router()
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Intake API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
