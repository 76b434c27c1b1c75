//! ChromaRetriever implementation.

use std::time::Duration;

use engine_core::{async_trait, EngineError, Retriever};
use reqwest::Client;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::api_types::{
    CollectionInfo, EmbeddingsRequest, EmbeddingsResponse, QueryRequest, QueryResponse,
};
use crate::config::ChromaRetrieverConfig;

/// Separator between concatenated snippets.
const SNIPPET_SEPARATOR: &str = "\n\n";

/// A [`Retriever`] implementation backed by a Chroma collection.
///
/// Queries are embedded through the Ollama embeddings endpoint, then
/// searched against the collection over Chroma's HTTP API. The collection
/// id is resolved by name once and cached for the life of the retriever.
pub struct ChromaRetriever {
    client: Client,
    config: ChromaRetrieverConfig,
    collection_id: OnceCell<String>,
}

impl ChromaRetriever {
    /// Create a new ChromaRetriever with the given configuration.
    pub fn new(config: ChromaRetrieverConfig) -> Result<Self, EngineError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                EngineError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            "ChromaRetriever initialized: chroma={}, collection={}, embed_model={}",
            config.chroma_url, config.collection, config.embed_model
        );

        Ok(Self {
            client,
            config,
            collection_id: OnceCell::new(),
        })
    }

    /// Create a ChromaRetriever from environment variables.
    ///
    /// See [`ChromaRetrieverConfig::from_env`] for the recognized
    /// variables.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::new(ChromaRetrieverConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &ChromaRetrieverConfig {
        &self.config
    }

    /// Embed the query text via the Ollama embeddings endpoint.
    async fn embed(&self, query: &str) -> Result<Vec<f32>, EngineError> {
        let url = format!("{}/api/embeddings", self.config.ollama_url);
        let request = EmbeddingsRequest {
            model: self.config.embed_model.clone(),
            prompt: query.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| map_send_error(e, &self.config.ollama_url))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(EngineError::Unavailable(format!(
                "Embeddings error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let embeddings: EmbeddingsResponse = response.json().await.map_err(|e| {
            EngineError::Malformed(format!("Failed to decode embeddings response: {}", e))
        })?;

        Ok(embeddings.embedding)
    }

    /// Resolve the collection id by name, caching the result.
    async fn collection_id(&self) -> Result<&str, EngineError> {
        self.collection_id
            .get_or_try_init(|| async {
                let url = format!(
                    "{}/api/v1/collections/{}",
                    self.config.chroma_url, self.config.collection
                );

                let response = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| map_send_error(e, &self.config.chroma_url))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(EngineError::Unavailable(format!(
                        "Collection '{}' lookup failed ({})",
                        self.config.collection,
                        status.as_u16()
                    )));
                }

                let info: CollectionInfo = response.json().await.map_err(|e| {
                    EngineError::Malformed(format!("Failed to decode collection info: {}", e))
                })?;

                debug!("Resolved collection '{}' to id {}", info.name, info.id);
                Ok(info.id)
            })
            .await
            .map(String::as_str)
    }
}

#[async_trait]
impl Retriever for ChromaRetriever {
    async fn retrieve(&self, query: &str, k: usize) -> Result<String, EngineError> {
        let embedding = self.embed(query).await?;
        let collection_id = self.collection_id().await?;

        let url = format!(
            "{}/api/v1/collections/{}/query",
            self.config.chroma_url, collection_id
        );
        let request = QueryRequest {
            query_embeddings: vec![embedding],
            n_results: k,
            include: vec!["documents".to_string()],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| map_send_error(e, &self.config.chroma_url))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(EngineError::Unavailable(format!(
                "Query error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let result: QueryResponse = response.json().await.map_err(|e| {
            EngineError::Malformed(format!("Failed to decode query response: {}", e))
        })?;

        let snippets = result
            .documents
            .unwrap_or_default()
            .into_iter()
            .next()
            .unwrap_or_default();

        debug!("Retrieved {} snippet(s) for query", snippets.len());

        Ok(snippets.join(SNIPPET_SEPARATOR))
    }

    fn name(&self) -> &str {
        "ChromaRetriever"
    }
}

/// Map a reqwest send error onto the capability error taxonomy.
fn map_send_error(error: reqwest::Error, url: &str) -> EngineError {
    if error.is_timeout() {
        EngineError::Timeout
    } else if error.is_connect() {
        EngineError::Unavailable(format!("Cannot connect to {}", url))
    } else {
        EngineError::Unavailable(format!("Failed to send request: {}", error))
    }
}
