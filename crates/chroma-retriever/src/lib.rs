//! Chroma-backed reference retrieval.
//!
//! Implements [`engine_core::Retriever`] against a Chroma server: the
//! query is embedded via the Ollama embeddings endpoint, then the
//! collection is searched over Chroma's HTTP API. Ranked snippets are
//! concatenated with a blank line between them, which keeps the result
//! deterministic for a given corpus and query.
//!
//! Corpus ingestion is out of scope here: the collection is assumed to
//! already exist and be queryable.

mod api_types;
mod config;
mod retriever;

pub use config::{ChromaRetrieverConfig, ChromaRetrieverConfigBuilder};
pub use retriever::ChromaRetriever;
