//! Configuration for ChromaRetriever.

use std::env;

/// Configuration for ChromaRetriever.
#[derive(Debug, Clone)]
pub struct ChromaRetrieverConfig {
    /// Chroma server URL.
    pub chroma_url: String,

    /// Collection holding the reference corpus.
    pub collection: String,

    /// Ollama server URL used for query embeddings.
    pub ollama_url: String,

    /// Embedding model name.
    pub embed_model: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ChromaRetrieverConfig {
    fn default() -> Self {
        Self {
            chroma_url: "http://127.0.0.1:8000".to_string(),
            collection: "Docs".to_string(),
            ollama_url: "http://127.0.0.1:11434".to_string(),
            embed_model: "nomic-embed-text".to_string(),
            timeout_secs: 60,
        }
    }
}

impl ChromaRetrieverConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CHROMA_URL` - Chroma server URL (default: http://127.0.0.1:8000)
    /// - `CHROMA_COLLECTION` - Collection name (default: Docs)
    /// - `OLLAMA_URL` - Ollama server URL (default: http://127.0.0.1:11434)
    /// - `EMBED_MODEL` - Embedding model (default: nomic-embed-text)
    /// - `CHROMA_TIMEOUT_SECS` - Request timeout (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            chroma_url: env::var("CHROMA_URL").unwrap_or(defaults.chroma_url),
            collection: env::var("CHROMA_COLLECTION").unwrap_or(defaults.collection),
            ollama_url: env::var("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            embed_model: env::var("EMBED_MODEL").unwrap_or(defaults.embed_model),
            timeout_secs: env::var("CHROMA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Create a new config builder.
    pub fn builder() -> ChromaRetrieverConfigBuilder {
        ChromaRetrieverConfigBuilder::default()
    }
}

/// Builder for ChromaRetrieverConfig.
#[derive(Debug, Default)]
pub struct ChromaRetrieverConfigBuilder {
    config: ChromaRetrieverConfig,
}

impl ChromaRetrieverConfigBuilder {
    /// Set the Chroma server URL.
    pub fn chroma_url(mut self, url: impl Into<String>) -> Self {
        self.config.chroma_url = url.into();
        self
    }

    /// Set the collection name.
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.config.collection = name.into();
        self
    }

    /// Set the Ollama server URL used for embeddings.
    pub fn ollama_url(mut self, url: impl Into<String>) -> Self {
        self.config.ollama_url = url.into();
        self
    }

    /// Set the embedding model.
    pub fn embed_model(mut self, model: impl Into<String>) -> Self {
        self.config.embed_model = model.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ChromaRetrieverConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChromaRetrieverConfig::default();

        assert_eq!(config.chroma_url, "http://127.0.0.1:8000");
        assert_eq!(config.collection, "Docs");
        assert_eq!(config.ollama_url, "http://127.0.0.1:11434");
        assert_eq!(config.embed_model, "nomic-embed-text");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ChromaRetrieverConfig::builder()
            .chroma_url("http://chroma.internal:8000")
            .collection("clinical-reference")
            .ollama_url("http://ollama.internal:11434")
            .embed_model("mxbai-embed-large")
            .timeout_secs(10)
            .build();

        assert_eq!(config.chroma_url, "http://chroma.internal:8000");
        assert_eq!(config.collection, "clinical-reference");
        assert_eq!(config.embed_model, "mxbai-embed-large");
        assert_eq!(config.timeout_secs, 10);
    }
}
