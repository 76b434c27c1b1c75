//! Dialogue orchestration for the Aiden intake service.
//!
//! This crate drives the turn protocol between the two model roles:
//!
//! - [`Orchestrator`] - the per-exchange state machine: resolve session,
//!   invoke the Interviewer, branch on intent, optionally run the
//!   analysis cycle, commit history, return the user-facing message
//! - [`IntentPolicy`] - swappable strategy deciding the CONTINUE/ANALYZE
//!   branch ([`TrustModel`] by default, [`MinimumExchanges`] as a stricter
//!   alternative)
//! - context helpers - pure assembly of the Reasoner prompt and the
//!   Interviewer resumption prompt
//!
//! Capability implementations and the session store are injected, so the
//! whole flow can be exercised with the `mock-engine` doubles.

mod context;
mod error;
mod locks;
mod orchestrator;
mod policy;

pub use context::{
    analysis_tail, build_reasoner_prompt, build_resumption_prompt, retrieval_query,
    ANALYSIS_TAIL_TURNS,
};
pub use error::OrchestratorError;
pub use orchestrator::{Exchange, Opening, Orchestrator, DEFAULT_RETRIEVAL_K, GREETING_SEED};
pub use policy::{IntentPolicy, MinimumExchanges, TrustModel};
