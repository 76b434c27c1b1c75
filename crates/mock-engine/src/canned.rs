//! Canned engine implementation - same reply on every call.

use async_trait::async_trait;

use engine_core::{
    ChatMessage, EngineError, Intent, InterviewerReply, LanguageModel, ReasonerFindings,
};

/// A simple engine that returns a fixed reply and fixed findings.
///
/// Useful for exercising the exchange flow without any real generation.
#[derive(Debug, Clone)]
pub struct CannedEngine {
    reply: InterviewerReply,
    findings: ReasonerFindings,
}

impl Default for CannedEngine {
    fn default() -> Self {
        Self {
            reply: InterviewerReply {
                assistant_message: "Thank you for sharing that. Can you tell me more?".to_string(),
                intent: Intent::Continue,
            },
            findings: ReasonerFindings::default(),
        }
    }
}

impl CannedEngine {
    /// Create a CannedEngine with a default CONTINUE reply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CannedEngine replying with the given message and CONTINUE.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            reply: InterviewerReply {
                assistant_message: message.into(),
                intent: Intent::Continue,
            },
            ..Self::default()
        }
    }

    /// Create a CannedEngine returning the given reply verbatim.
    pub fn with_reply(reply: InterviewerReply) -> Self {
        Self {
            reply,
            ..Self::default()
        }
    }

    /// Set the findings returned by the reasoner role.
    pub fn with_findings(mut self, findings: ReasonerFindings) -> Self {
        self.findings = findings;
        self
    }
}

#[async_trait]
impl LanguageModel for CannedEngine {
    async fn interviewer_turn(
        &self,
        _messages: &[ChatMessage],
    ) -> Result<InterviewerReply, EngineError> {
        Ok(self.reply.clone())
    }

    async fn reasoner_analysis(
        &self,
        _messages: &[ChatMessage],
    ) -> Result<ReasonerFindings, EngineError> {
        Ok(self.findings.clone())
    }

    fn name(&self) -> &str {
        "CannedEngine"
    }
}
