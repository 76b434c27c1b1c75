//! The session orchestrator: per-exchange turn protocol between the
//! Interviewer and the Reasoner.

use std::sync::Arc;

use engine_core::{ChatMessage, Intent, LanguageModel, Retriever, Session, SessionStore, Turn};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::context::{
    analysis_tail, build_reasoner_prompt, build_resumption_prompt, retrieval_query,
};
use crate::error::OrchestratorError;
use crate::locks::SessionLocks;
use crate::policy::{IntentPolicy, TrustModel};

/// Seed instruction used to generate a session's opening greeting.
/// Sent to the Interviewer as a user message that is never stored.
pub const GREETING_SEED: &str = "Start the intake session and greet the patient naturally.";

/// Default number of reference snippets retrieved per analysis cycle.
pub const DEFAULT_RETRIEVAL_K: usize = 5;

/// A freshly opened session.
#[derive(Debug, Clone)]
pub struct Opening {
    /// Opaque id of the new session.
    pub session_id: String,
    /// The opening greeting (the session's only stored turn so far).
    pub assistant_message: String,
}

/// Outcome of one chat exchange.
///
/// `intent` is always [`Intent::Continue`] at this boundary: `ANALYZE` is
/// an internal signal, never a terminal state exposed to callers.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// Session the exchange ran against. A fresh id when the caller's id
    /// was unknown and a new session was silently started.
    pub session_id: String,
    /// Text to surface to the user.
    pub assistant_message: String,
    /// Exchange-level intent, normalized to `Continue`.
    pub intent: Intent,
}

/// Drives the full turn protocol for one exchange: update history, invoke
/// the Interviewer, branch on intent, optionally run the analysis cycle,
/// update history again, and return the user-facing message.
///
/// The orchestrator exclusively owns session lifecycle and history
/// mutation; capability implementations are pure request/response.
pub struct Orchestrator {
    /// Structured-output generation capability (both model roles).
    model: Arc<dyn LanguageModel>,
    /// Reference-corpus retrieval capability.
    retriever: Arc<dyn Retriever>,
    /// Injected session storage.
    store: Arc<dyn SessionStore>,
    /// Branch decision strategy.
    policy: Box<dyn IntentPolicy>,
    /// Snippets requested per analysis cycle.
    retrieval_k: usize,
    /// Per-session mutual exclusion.
    locks: SessionLocks,
}

impl Orchestrator {
    /// Create an orchestrator with the default intent policy
    /// ([`TrustModel`]) and retrieval depth.
    pub fn new(
        model: Arc<dyn LanguageModel>,
        retriever: Arc<dyn Retriever>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            model,
            retriever,
            store,
            policy: Box::new(TrustModel),
            retrieval_k: DEFAULT_RETRIEVAL_K,
            locks: SessionLocks::new(),
        }
    }

    /// Replace the intent policy.
    pub fn with_policy(mut self, policy: impl IntentPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Override how many reference snippets are retrieved per analysis.
    pub fn with_retrieval_k(mut self, k: usize) -> Self {
        self.retrieval_k = k;
        self
    }

    /// Whether the generation capability reports itself ready.
    pub async fn is_ready(&self) -> bool {
        self.model.is_ready().await
    }

    /// Create a session and produce its opening greeting.
    pub async fn start(&self) -> Result<Opening, OrchestratorError> {
        let opening = self.open_session().await?;
        info!(session_id = %opening.session_id, "Started session");
        Ok(opening)
    }

    /// Destroy the session unconditionally (no error if absent), then run
    /// the same creation path as a brand-new session.
    ///
    /// The old id becomes permanently invalid.
    pub async fn reset(&self, session_id: &str) -> Result<Opening, OrchestratorError> {
        {
            let _guard = self.locks.acquire(session_id).await;
            if self.store.remove(session_id).await {
                debug!(session_id, "Removed session on reset");
            }
        }
        self.locks.forget(session_id).await;

        let opening = self.open_session().await?;
        info!(old_id = session_id, session_id = %opening.session_id, "Reset session");
        Ok(opening)
    }

    /// Run one exchange: append the user turn, invoke the Interviewer,
    /// branch on intent, and return the user-facing reply.
    ///
    /// An unknown `session_id` silently starts a fresh session and treats
    /// the incoming message as its first user turn (a missing session is
    /// expected, e.g. after a restart). History is committed to the store
    /// only after every capability call has succeeded, so a failed
    /// exchange leaves the stored session untouched and the caller may
    /// retry.
    pub async fn chat(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<Exchange, OrchestratorError> {
        let text = message.trim();
        if text.is_empty() {
            return Err(OrchestratorError::EmptyMessage);
        }

        // Resolve the session and hold its lock for the whole exchange.
        // A session deleted between resolution and locking (concurrent
        // reset) is treated like an unknown id.
        let (id, _guard, mut session) = loop {
            let id = match self.store.get(session_id).await {
                Some(session) => session.id().to_string(),
                None => {
                    let opening = self.open_session().await?;
                    debug!(
                        stale_id = session_id,
                        session_id = %opening.session_id,
                        "Unknown session id, silently started a fresh session"
                    );
                    opening.session_id
                }
            };
            let guard = self.locks.acquire(&id).await;
            if let Some(session) = self.store.get(&id).await {
                break (id, guard, session);
            }
        };

        let user_turn = Turn::user(text);

        // Staged view of the exchange; committed only on success.
        let mut staged: Vec<Turn> = session.history().to_vec();
        staged.push(user_turn.clone());

        let messages: Vec<ChatMessage> = staged.iter().map(ChatMessage::from).collect();
        let reply = self.model.interviewer_turn(&messages).await?;

        let assistant_message = match self.policy.decide(&reply, &staged) {
            Intent::Continue => reply.assistant_message,
            Intent::Analyze => {
                // The pre-analysis acknowledgment is superseded by the
                // resumption reply and is discarded, never stored.
                debug!(session_id = %id, "Entering analysis cycle");
                self.run_analysis_cycle(&staged, messages).await?
            }
        };

        session.push(user_turn);
        session.push(Turn::assistant(assistant_message.clone()));
        self.store.put(session).await;

        Ok(Exchange {
            session_id: id,
            assistant_message,
            intent: Intent::Continue,
        })
    }

    /// The analysis cycle: retrieval keyed on the bounded history tail,
    /// Reasoner pattern extraction, then the Interviewer's resumption
    /// reply. The two generation calls are strictly sequential - the
    /// resumption prompt depends on the Reasoner's output.
    async fn run_analysis_cycle(
        &self,
        staged: &[Turn],
        mut messages: Vec<ChatMessage>,
    ) -> Result<String, OrchestratorError> {
        let tail = analysis_tail(staged);
        let query = retrieval_query(tail);

        let reference = self.retriever.retrieve(&query, self.retrieval_k).await?;
        if reference.is_empty() {
            warn!("Retrieval returned no reference text");
        }

        let analysis_prompt = build_reasoner_prompt(tail, &reference);
        let findings = self
            .model
            .reasoner_analysis(&[ChatMessage::user(analysis_prompt)])
            .await?;
        if findings.is_empty() {
            debug!("Reasoner returned no findings in any category");
        }

        let resumption = build_resumption_prompt(&findings);
        messages.push(ChatMessage::user(resumption));

        let final_reply = self.model.interviewer_turn(&messages).await?;
        Ok(final_reply.assistant_message)
    }

    /// Create, greet, and store a fresh session.
    ///
    /// The greeting is generated by the Interviewer from a seed message
    /// that is not stored; the session's history starts with exactly one
    /// assistant turn.
    async fn open_session(&self) -> Result<Opening, OrchestratorError> {
        let seed = [ChatMessage::user(GREETING_SEED)];
        let reply = self.model.interviewer_turn(&seed).await?;

        let session_id = Uuid::new_v4().to_string();
        let mut session = Session::new(session_id.clone());
        session.push(Turn::assistant(reply.assistant_message.clone()));
        self.store.put(session).await;

        Ok(Opening {
            session_id,
            assistant_message: reply.assistant_message,
        })
    }
}
