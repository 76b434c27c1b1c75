//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use orchestrator::DEFAULT_RETRIEVAL_K;

/// Intake API server configuration.
///
/// Engine and retriever settings are loaded by their own crates; this
/// covers only the HTTP layer and orchestration knobs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Reference snippets retrieved per analysis cycle.
    pub retrieval_k: usize,
    /// Optional minimum user turns before analysis is allowed.
    pub min_user_turns: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `AIDEN_ADDR` | Server bind address | `127.0.0.1:8787` |
    /// | `RETRIEVAL_K` | Snippets per analysis cycle | `5` |
    /// | `MIN_USER_TURNS` | Minimum user turns before analysis | (unset: trust the model) |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("AIDEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8787".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let retrieval_k = env::var("RETRIEVAL_K")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RETRIEVAL_K);

        let min_user_turns = env::var("MIN_USER_TURNS")
            .ok()
            .and_then(|v| v.parse().ok());

        Ok(Self {
            addr,
            retrieval_k,
            min_user_turns,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid AIDEN_ADDR format")]
    InvalidAddr,
}
