//! Session lifecycle and the in-memory session store.
//!
//! Sessions are ephemeral: they live only in process memory and are
//! destroyed by an explicit reset or by process termination.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::message::Turn;

/// Maximum number of turns retained per session.
pub const MAX_HISTORY: usize = 100;

/// Default maximum number of live sessions before LRU eviction.
const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// One interview session: an opaque id plus a bounded, append-only history.
///
/// The history keeps the most recent [`MAX_HISTORY`] turns; the oldest
/// turns are dropped first when the bound is exceeded.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    history: Vec<Turn>,
}

impl Session {
    /// Create an empty session with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            history: Vec::new(),
        }
    }

    /// The session's opaque identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The retained history, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Append a turn, then trim to the most recent [`MAX_HISTORY`] entries.
    pub fn push(&mut self, turn: Turn) {
        self.history.push(turn);
        self.trim();
    }

    /// Drop the oldest turns beyond the history bound.
    pub fn trim(&mut self) {
        if self.history.len() > MAX_HISTORY {
            let excess = self.history.len() - MAX_HISTORY;
            self.history.drain(0..excess);
        }
    }
}

/// Storage abstraction for sessions, injected into the orchestrator.
///
/// Absence of a session is an expected, first-class outcome: `get` returns
/// `None`, never an error, since clients may hold stale or fabricated ids.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch a snapshot of the session with the given id.
    async fn get(&self, id: &str) -> Option<Session>;

    /// Insert or replace a session.
    async fn put(&self, session: Session);

    /// Remove a session, returning whether it existed.
    async fn remove(&self, id: &str) -> bool;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}

/// In-memory session store with LRU eviction.
///
/// To prevent memory exhaustion from clients minting many session ids,
/// the store tracks at most `max_sessions` sessions and evicts the least
/// recently used ones when the limit is reached. `get` and `put` both mark
/// a session as recently used.
///
/// # Example
///
/// ```rust
/// use engine_core::{MemorySessionStore, Session, SessionStore, Turn};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let store = MemorySessionStore::new();
///
///     let mut session = Session::new("S1");
///     session.push(Turn::assistant("Hello, I'm glad you're here."));
///     store.put(session).await;
///
///     let found = store.get("S1").await.unwrap();
///     assert_eq!(found.history().len(), 1);
///     assert!(store.get("S2").await.is_none());
/// }
/// ```
#[derive(Debug)]
pub struct MemorySessionStore {
    /// Map from session id to session.
    /// Uses IndexMap to maintain insertion order for LRU eviction.
    sessions: RwLock<IndexMap<String, Session>>,
    /// Maximum number of sessions to track before LRU eviction.
    max_sessions: usize,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySessionStore {
    /// Create a store with the default session limit (10,000).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }

    /// Create a store with a custom session limit.
    pub fn with_capacity(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(IndexMap::new()),
            max_sessions,
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().await;

        // Move to end to mark as recently used (LRU behavior)
        let session = sessions.shift_remove(id)?;
        sessions.insert(id.to_string(), session.clone());
        Some(session)
    }

    async fn put(&self, session: Session) {
        let mut sessions = self.sessions.write().await;

        // Remove and re-insert to move to end (mark as recently used)
        sessions.shift_remove(session.id());
        sessions.insert(session.id().to_string(), session);

        // LRU eviction: remove oldest entries if we exceed max_sessions
        while sessions.len() > self.max_sessions {
            sessions.shift_remove_index(0);
        }
    }

    async fn remove(&self, id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.shift_remove(id).is_some()
    }

    async fn count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_turns(id: &str, turns: usize) -> Session {
        let mut session = Session::new(id);
        for i in 0..turns {
            session.push(Turn::user(format!("turn {}", i)));
        }
        session
    }

    #[test]
    fn test_history_bound_and_fifo_eviction() {
        let session = session_with_turns("S1", MAX_HISTORY + 7);

        assert_eq!(session.history().len(), MAX_HISTORY);
        // The retained entries are exactly the most recent ones, in order.
        assert_eq!(session.history()[0].content, "turn 7");
        assert_eq!(
            session.history()[MAX_HISTORY - 1].content,
            format!("turn {}", MAX_HISTORY + 6)
        );
    }

    #[test]
    fn test_push_below_bound_keeps_everything() {
        let session = session_with_turns("S1", 3);
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.history()[0].content, "turn 0");
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let store = MemorySessionStore::new();
        store.put(session_with_turns("S1", 2)).await;

        let found = store.get("S1").await.unwrap();
        assert_eq!(found.id(), "S1");
        assert_eq!(found.history().len(), 2);
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let store = MemorySessionStore::new();
        assert!(store.get("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_separate_sessions() {
        let store = MemorySessionStore::new();
        store.put(session_with_turns("A", 1)).await;
        store.put(session_with_turns("B", 2)).await;

        assert_eq!(store.get("A").await.unwrap().history().len(), 1);
        assert_eq!(store.get("B").await.unwrap().history().len(), 2);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemorySessionStore::new();
        store.put(session_with_turns("S1", 1)).await;

        assert!(store.remove("S1").await);
        assert!(store.get("S1").await.is_none());
        // Removing again is not an error.
        assert!(!store.remove("S1").await);
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let store = MemorySessionStore::with_capacity(3);

        store.put(session_with_turns("S1", 1)).await;
        store.put(session_with_turns("S2", 1)).await;
        store.put(session_with_turns("S3", 1)).await;
        store.put(session_with_turns("S4", 1)).await;

        // Should have evicted S1 (oldest)
        assert_eq!(store.count().await, 3);
        assert!(store.get("S1").await.is_none());
        assert!(store.get("S2").await.is_some());
        assert!(store.get("S3").await.is_some());
        assert!(store.get("S4").await.is_some());
    }

    #[tokio::test]
    async fn test_lru_access_order() {
        let store = MemorySessionStore::with_capacity(3);

        store.put(session_with_turns("S1", 1)).await;
        store.put(session_with_turns("S2", 1)).await;
        store.put(session_with_turns("S3", 1)).await;

        // Access S1 to make it recently used
        let _ = store.get("S1").await;

        // Adding a 4th session should evict S2 (now oldest)
        store.put(session_with_turns("S4", 1)).await;

        assert!(store.get("S2").await.is_none());
        assert!(store.get("S1").await.is_some());
        assert!(store.get("S3").await.is_some());
        assert!(store.get("S4").await.is_some());
    }
}
