//! Chroma and Ollama-embeddings API request and response types.

use serde::{Deserialize, Serialize};

/// Embeddings request to the Ollama `/api/embeddings` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingsRequest {
    /// Embedding model name.
    pub model: String,
    /// Text to embed.
    pub prompt: String,
}

/// Embeddings response.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingsResponse {
    /// The embedding vector.
    pub embedding: Vec<f32>,
}

/// Collection metadata from `GET /api/v1/collections/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionInfo {
    /// Collection id used for query requests.
    pub id: String,
    /// Collection name.
    pub name: String,
}

/// Query request to `POST /api/v1/collections/{id}/query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    /// One embedding per query.
    pub query_embeddings: Vec<Vec<f32>>,
    /// Number of results to return.
    pub n_results: usize,
    /// Which fields to include in the response.
    pub include: Vec<String>,
}

/// Query response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Ranked documents, one row per query embedding.
    #[serde(default)]
    pub documents: Option<Vec<Vec<String>>>,
}
