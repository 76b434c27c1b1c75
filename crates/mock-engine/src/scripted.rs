//! Scripted engine implementation - pre-queued replies with call counting.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use engine_core::{
    ChatMessage, EngineError, InterviewerReply, LanguageModel, ReasonerFindings,
};

/// An engine that replays queued replies and findings in order.
///
/// Every invocation is counted, which makes it possible to assert the
/// exact number of generation calls an exchange issues. An exhausted
/// queue fails with `EngineError::Unavailable` so a test that issues more
/// calls than it scripted fails loudly instead of looping.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    replies: Mutex<VecDeque<InterviewerReply>>,
    findings: Mutex<VecDeque<ReasonerFindings>>,
    interviewer_calls: AtomicUsize,
    reasoner_calls: AtomicUsize,
}

impl ScriptedEngine {
    /// Create an engine with empty scripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next Interviewer reply.
    pub fn queue_reply(&self, reply: InterviewerReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Queue the next Reasoner findings.
    pub fn queue_findings(&self, findings: ReasonerFindings) {
        self.findings.lock().unwrap().push_back(findings);
    }

    /// Number of Interviewer invocations so far.
    pub fn interviewer_calls(&self) -> usize {
        self.interviewer_calls.load(Ordering::SeqCst)
    }

    /// Number of Reasoner invocations so far.
    pub fn reasoner_calls(&self) -> usize {
        self.reasoner_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageModel for ScriptedEngine {
    async fn interviewer_turn(
        &self,
        _messages: &[ChatMessage],
    ) -> Result<InterviewerReply, EngineError> {
        self.interviewer_calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| EngineError::Unavailable("interviewer script exhausted".to_string()))
    }

    async fn reasoner_analysis(
        &self,
        _messages: &[ChatMessage],
    ) -> Result<ReasonerFindings, EngineError> {
        self.reasoner_calls.fetch_add(1, Ordering::SeqCst);
        self.findings
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| EngineError::Unavailable("reasoner script exhausted".to_string()))
    }

    fn name(&self) -> &str {
        "ScriptedEngine"
    }
}
