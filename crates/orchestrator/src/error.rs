//! Error types for orchestrator operations.

use engine_core::EngineError;
use thiserror::Error;

/// Errors that can occur while driving an exchange.
///
/// Capability errors propagate unmodified; a failed exchange leaves the
/// stored session untouched, so the caller may retry the same exchange.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The caller supplied an empty or whitespace-only message.
    #[error("empty user message")]
    EmptyMessage,

    /// A capability invocation failed.
    #[error("capability error: {0}")]
    Engine(#[from] EngineError),
}
