//! Static retriever implementation - fixed reference text.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use engine_core::{EngineError, Retriever};

/// A retriever that returns the same reference text for every query,
/// counting calls.
#[derive(Debug, Default)]
pub struct StaticRetriever {
    text: String,
    calls: AtomicUsize,
}

impl StaticRetriever {
    /// Create a retriever returning the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a retriever returning empty reference text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of retrieval calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Retriever for StaticRetriever {
    async fn retrieve(&self, _query: &str, _k: usize) -> Result<String, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.clone())
    }

    fn name(&self) -> &str {
        "StaticRetriever"
    }
}
