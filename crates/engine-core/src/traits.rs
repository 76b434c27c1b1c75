//! Capability traits consumed by the orchestrator.

use async_trait::async_trait;

use crate::error::EngineError;
use crate::message::ChatMessage;
use crate::output::{InterviewerReply, ReasonerFindings};

/// A structured-output language capability covering both model roles.
///
/// Implementations are pure request/response: they never mutate session
/// state. The trait is object-safe and can be used as
/// `Arc<dyn LanguageModel>`.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Run the Interviewer role over the given messages.
    ///
    /// Returns exactly one structured reply, or an error if the capability
    /// is unreachable or its output does not match the expected shape.
    async fn interviewer_turn(
        &self,
        messages: &[ChatMessage],
    ) -> Result<InterviewerReply, EngineError>;

    /// Run the Reasoner role over the given messages.
    async fn reasoner_analysis(
        &self,
        messages: &[ChatMessage],
    ) -> Result<ReasonerFindings, EngineError>;

    /// Get a human-readable name for this implementation.
    fn name(&self) -> &str;

    /// Check if the model is ready to serve requests.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}

/// Ranked-snippet retrieval over the clinical reference corpus.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Retrieve up to `k` snippets for `query`, concatenated in ranked
    /// order. The concatenation must be deterministic for a given corpus
    /// and query.
    async fn retrieve(&self, query: &str, k: usize) -> Result<String, EngineError>;

    /// Get a human-readable name for this implementation.
    fn name(&self) -> &str;
}
