//! OllamaEngine implementation.

use std::time::Duration;

use engine_core::{
    async_trait, hash_prompt, ChatMessage, EngineError, InterviewerReply, LanguageModel,
    ReasonerFindings,
};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{OllamaChatRequest, OllamaChatResponse, OllamaErrorResponse, OllamaOptions};
use crate::config::OllamaEngineConfig;

/// A [`LanguageModel`] implementation backed by a local Ollama server.
///
/// Both roles share one HTTP client; each role has its own model,
/// temperature, and system prompt. The engine is stateless between calls.
pub struct OllamaEngine {
    client: Client,
    config: OllamaEngineConfig,
}

impl OllamaEngine {
    /// Create a new OllamaEngine with the given configuration.
    pub fn new(config: OllamaEngineConfig) -> Result<Self, EngineError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                EngineError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            "OllamaEngine initialized: url={}, interviewer={}, reasoner={}",
            config.api_url, config.interviewer_model, config.reasoner_model
        );
        info!(
            "Interviewer prompt fingerprint: {}",
            hash_prompt(config.effective_interviewer_prompt())
        );
        info!(
            "Reasoner prompt fingerprint: {}",
            hash_prompt(config.effective_reasoner_prompt())
        );

        Ok(Self { client, config })
    }

    /// Create an OllamaEngine from environment variables.
    ///
    /// See [`OllamaEngineConfig::from_env`] for the recognized variables.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::new(OllamaEngineConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &OllamaEngineConfig {
        &self.config
    }

    /// Issue one chat completion and return the raw JSON content string.
    async fn chat(
        &self,
        model: &str,
        temperature: f32,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, EngineError> {
        let url = format!("{}/api/chat", self.config.api_url);

        let mut request_messages = Vec::with_capacity(messages.len() + 1);
        request_messages.push(ChatMessage::system(system_prompt));
        request_messages.extend(messages.iter().cloned());

        let request = OllamaChatRequest {
            model: model.to_string(),
            messages: request_messages,
            stream: false,
            format: "json".to_string(),
            options: OllamaOptions { temperature },
        };

        debug!(
            "Sending chat request: model={}, messages={}",
            model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EngineError::Timeout
                } else if e.is_connect() {
                    EngineError::Unavailable(format!(
                        "Cannot connect to Ollama at {}. Is Ollama running?",
                        self.config.api_url
                    ))
                } else {
                    EngineError::Unavailable(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<OllamaErrorResponse>(&error_text) {
                return Err(EngineError::Unavailable(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error
                )));
            }

            return Err(EngineError::Unavailable(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: OllamaChatResponse = response.json().await.map_err(|e| {
            EngineError::Malformed(format!("Failed to decode chat response: {}", e))
        })?;

        if !completion.done {
            warn!("Ollama reported an unfinished generation");
        }

        Ok(completion.message.content)
    }
}

/// Parse Interviewer content into a typed reply, or fail as malformed.
fn parse_interviewer_reply(content: &str) -> Result<InterviewerReply, EngineError> {
    serde_json::from_str(content).map_err(|e| {
        EngineError::Malformed(format!(
            "Interviewer output did not match the expected shape: {}",
            e
        ))
    })
}

/// Parse Reasoner content into typed findings, or fail as malformed.
fn parse_reasoner_findings(content: &str) -> Result<ReasonerFindings, EngineError> {
    serde_json::from_str(content).map_err(|e| {
        EngineError::Malformed(format!(
            "Reasoner output did not match the expected shape: {}",
            e
        ))
    })
}

#[async_trait]
impl LanguageModel for OllamaEngine {
    async fn interviewer_turn(
        &self,
        messages: &[ChatMessage],
    ) -> Result<InterviewerReply, EngineError> {
        let content = self
            .chat(
                &self.config.interviewer_model,
                self.config.interviewer_temperature,
                self.config.effective_interviewer_prompt(),
                messages,
            )
            .await?;

        parse_interviewer_reply(&content)
    }

    async fn reasoner_analysis(
        &self,
        messages: &[ChatMessage],
    ) -> Result<ReasonerFindings, EngineError> {
        let content = self
            .chat(
                &self.config.reasoner_model,
                self.config.reasoner_temperature,
                self.config.effective_reasoner_prompt(),
                messages,
            )
            .await?;

        parse_reasoner_findings(&content)
    }

    fn name(&self) -> &str {
        "OllamaEngine"
    }

    async fn is_ready(&self) -> bool {
        let url = format!("{}/api/tags", self.config.api_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
