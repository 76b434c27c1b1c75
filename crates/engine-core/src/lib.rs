//! Core traits and types for capability implementations in the Aiden
//! intake service.
//!
//! This crate provides the shared interface between the dialogue
//! orchestrator and its external collaborators. It defines:
//!
//! - [`LanguageModel`] / [`Retriever`] - The traits capability adapters
//!   must implement
//! - [`Turn`] / [`ChatMessage`] - Stored conversation turns vs. wire
//!   messages for generation requests
//! - [`InterviewerReply`] / [`ReasonerFindings`] - Structured outputs of
//!   the two model roles
//! - [`EngineError`] - Error types for capability operations
//! - [`SessionStore`] / [`MemorySessionStore`] - Session storage
//!
//! # Example
//!
//! ```rust
//! use engine_core::{
//!     async_trait, ChatMessage, EngineError, Intent, InterviewerReply, LanguageModel,
//!     ReasonerFindings,
//! };
//!
//! struct MyModel;
//!
//! #[async_trait]
//! impl LanguageModel for MyModel {
//!     async fn interviewer_turn(
//!         &self,
//!         _messages: &[ChatMessage],
//!     ) -> Result<InterviewerReply, EngineError> {
//!         Ok(InterviewerReply {
//!             assistant_message: "How have you been sleeping?".to_string(),
//!             intent: Intent::Continue,
//!         })
//!     }
//!
//!     async fn reasoner_analysis(
//!         &self,
//!         _messages: &[ChatMessage],
//!     ) -> Result<ReasonerFindings, EngineError> {
//!         Ok(ReasonerFindings::default())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyModel"
//!     }
//! }
//! ```

mod error;
mod message;
mod output;
mod prompt;
mod session;
mod traits;

pub use error::EngineError;
pub use message::{ChatMessage, Turn, TurnRole};
pub use output::{Intent, InterviewerReply, ReasonerFindings};
pub use prompt::hash_prompt;
pub use session::{MemorySessionStore, Session, SessionStore, MAX_HISTORY};
pub use traits::{LanguageModel, Retriever};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
