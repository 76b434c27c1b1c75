//! Intent decision strategies.

use engine_core::{Intent, InterviewerReply, Turn, TurnRole};

/// Strategy deciding the orchestration branch for the current exchange.
///
/// The orchestrator takes whatever the policy decides; swapping in a
/// stricter strategy never requires touching the orchestrator itself.
pub trait IntentPolicy: Send + Sync {
    /// Decide the branch given the Interviewer's reply and the staged
    /// history (existing turns plus the incoming user turn).
    fn decide(&self, reply: &InterviewerReply, history: &[Turn]) -> Intent;
}

/// Trust the Interviewer's self-reported intent completely.
///
/// No independent check of conversation length or content: the
/// "have we gathered enough" judgment lives entirely in the generation
/// step.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustModel;

impl IntentPolicy for TrustModel {
    fn decide(&self, reply: &InterviewerReply, _history: &[Turn]) -> Intent {
        reply.intent
    }
}

/// Require a minimum number of user turns before honoring `ANALYZE`.
///
/// Downgrades a premature `ANALYZE` to `CONTINUE`; never upgrades a
/// `CONTINUE`.
#[derive(Debug, Clone, Copy)]
pub struct MinimumExchanges {
    /// User turns that must exist before analysis is allowed.
    pub min_user_turns: usize,
}

impl MinimumExchanges {
    /// Create a policy requiring at least `min_user_turns` user turns.
    pub fn new(min_user_turns: usize) -> Self {
        Self { min_user_turns }
    }
}

impl IntentPolicy for MinimumExchanges {
    fn decide(&self, reply: &InterviewerReply, history: &[Turn]) -> Intent {
        if reply.intent == Intent::Analyze {
            let user_turns = history
                .iter()
                .filter(|turn| turn.role == TurnRole::User)
                .count();
            if user_turns < self.min_user_turns {
                return Intent::Continue;
            }
        }
        reply.intent
    }
}
