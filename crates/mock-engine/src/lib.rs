//! Mock capability implementations for intake service testing.
//!
//! This crate provides mock implementations of the `LanguageModel` and
//! `Retriever` traits for testing:
//! - `CannedEngine` - Returns the same reply and findings on every call
//! - `ScriptedEngine` - Pops pre-queued replies and findings, counting calls
//! - `FailingEngine` / `FailingRetriever` - Always fail with a chosen error
//! - `StaticRetriever` - Returns fixed reference text, counting calls
//!
//! For production generation and retrieval, use the `ollama-engine` and
//! `chroma-retriever` crates instead.
//!
//! # Example
//!
//! ```rust
//! use mock_engine::{CannedEngine, LanguageModel};
//! use engine_core::ChatMessage;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), engine_core::EngineError> {
//!     let engine = CannedEngine::with_message("How are you feeling today?");
//!
//!     let reply = engine.interviewer_turn(&[ChatMessage::user("Hi")]).await?;
//!     assert_eq!(reply.assistant_message, "How are you feeling today?");
//!     Ok(())
//! }
//! ```

mod canned;
mod failing;
mod retriever;
mod scripted;

// Re-export engine-core types for convenience
pub use engine_core::{
    async_trait, ChatMessage, EngineError, Intent, InterviewerReply, LanguageModel,
    ReasonerFindings, Retriever,
};

// Export mock implementations
pub use canned::CannedEngine;
pub use failing::{FailingEngine, FailingRetriever, FailureMode};
pub use retriever::StaticRetriever;
pub use scripted::ScriptedEngine;
