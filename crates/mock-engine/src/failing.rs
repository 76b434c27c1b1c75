//! Failing capability implementations for error-path testing.

use async_trait::async_trait;

use engine_core::{
    ChatMessage, EngineError, InterviewerReply, LanguageModel, ReasonerFindings, Retriever,
};

/// Which error a failing mock produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// `EngineError::Unavailable`
    Unavailable,
    /// `EngineError::Timeout`
    Timeout,
    /// `EngineError::Malformed`
    Malformed,
}

impl FailureMode {
    fn error(&self) -> EngineError {
        match self {
            Self::Unavailable => EngineError::Unavailable("engine offline (mock)".to_string()),
            Self::Timeout => EngineError::Timeout,
            Self::Malformed => EngineError::Malformed("unparseable output (mock)".to_string()),
        }
    }
}

/// An engine that fails every invocation with the configured error.
#[derive(Debug, Clone, Copy)]
pub struct FailingEngine {
    mode: FailureMode,
}

impl Default for FailingEngine {
    fn default() -> Self {
        Self::new(FailureMode::Unavailable)
    }
}

impl FailingEngine {
    /// Create an engine failing with the given mode.
    pub fn new(mode: FailureMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl LanguageModel for FailingEngine {
    async fn interviewer_turn(
        &self,
        _messages: &[ChatMessage],
    ) -> Result<InterviewerReply, EngineError> {
        Err(self.mode.error())
    }

    async fn reasoner_analysis(
        &self,
        _messages: &[ChatMessage],
    ) -> Result<ReasonerFindings, EngineError> {
        Err(self.mode.error())
    }

    fn name(&self) -> &str {
        "FailingEngine"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}

/// A retriever that fails every query with the configured error.
#[derive(Debug, Clone, Copy)]
pub struct FailingRetriever {
    mode: FailureMode,
}

impl Default for FailingRetriever {
    fn default() -> Self {
        Self::new(FailureMode::Unavailable)
    }
}

impl FailingRetriever {
    /// Create a retriever failing with the given mode.
    pub fn new(mode: FailureMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl Retriever for FailingRetriever {
    async fn retrieve(&self, _query: &str, _k: usize) -> Result<String, EngineError> {
        Err(self.mode.error())
    }

    fn name(&self) -> &str {
        "FailingRetriever"
    }
}
