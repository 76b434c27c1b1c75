//! Configuration for OllamaEngine.

use std::env;
use std::path::Path;

use crate::prompts;

/// Configuration for OllamaEngine.
#[derive(Debug, Clone)]
pub struct OllamaEngineConfig {
    /// Ollama server URL.
    pub api_url: String,

    /// Model used for the Interviewer role.
    pub interviewer_model: String,

    /// Model used for the Reasoner role.
    pub reasoner_model: String,

    /// Sampling temperature for the Interviewer role.
    pub interviewer_temperature: f32,

    /// Sampling temperature for the Reasoner role.
    pub reasoner_temperature: f32,

    /// Request timeout in seconds for generation calls.
    pub timeout_secs: u64,

    /// Optional Interviewer system prompt override.
    pub interviewer_prompt: Option<String>,

    /// Optional Reasoner system prompt override.
    pub reasoner_prompt: Option<String>,
}

impl Default for OllamaEngineConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:11434".to_string(),
            interviewer_model: "llama3.2:3b".to_string(),
            reasoner_model: "nemotron-mini".to_string(),
            interviewer_temperature: 0.6,
            reasoner_temperature: 0.2,
            timeout_secs: 120,
            interviewer_prompt: None,
            reasoner_prompt: None,
        }
    }
}

impl OllamaEngineConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional (a local Ollama server needs no key):
    /// - `OLLAMA_URL` - Server URL (default: http://127.0.0.1:11434)
    /// - `INTERVIEWER_MODEL` - Interviewer model (default: llama3.2:3b)
    /// - `REASONER_MODEL` - Reasoner model (default: nemotron-mini)
    /// - `INTERVIEWER_TEMPERATURE` - Interviewer temperature (default: 0.6)
    /// - `REASONER_TEMPERATURE` - Reasoner temperature (default: 0.2)
    /// - `OLLAMA_TIMEOUT_SECS` - Request timeout (default: 120)
    /// - `INTERVIEWER_PROMPT` - Interviewer system prompt (overrides file)
    /// - `INTERVIEWER_PROMPT_FILE` - Path to Interviewer prompt file
    /// - `REASONER_PROMPT` - Reasoner system prompt (overrides file)
    /// - `REASONER_PROMPT_FILE` - Path to Reasoner prompt file
    ///
    /// Prompt priority per role: env var, then prompt file, then the
    /// embedded default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = env::var("OLLAMA_URL").unwrap_or(defaults.api_url);
        let interviewer_model =
            env::var("INTERVIEWER_MODEL").unwrap_or(defaults.interviewer_model);
        let reasoner_model = env::var("REASONER_MODEL").unwrap_or(defaults.reasoner_model);

        let interviewer_temperature = env::var("INTERVIEWER_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.interviewer_temperature);

        let reasoner_temperature = env::var("REASONER_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.reasoner_temperature);

        let timeout_secs = env::var("OLLAMA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        let interviewer_prompt = prompt_from_env("INTERVIEWER_PROMPT", "INTERVIEWER_PROMPT_FILE");
        let reasoner_prompt = prompt_from_env("REASONER_PROMPT", "REASONER_PROMPT_FILE");

        Self {
            api_url,
            interviewer_model,
            reasoner_model,
            interviewer_temperature,
            reasoner_temperature,
            timeout_secs,
            interviewer_prompt,
            reasoner_prompt,
        }
    }

    /// The effective Interviewer system prompt.
    pub fn effective_interviewer_prompt(&self) -> &str {
        self.interviewer_prompt
            .as_deref()
            .unwrap_or(prompts::INTERVIEWER_SYSTEM_PROMPT)
    }

    /// The effective Reasoner system prompt.
    pub fn effective_reasoner_prompt(&self) -> &str {
        self.reasoner_prompt
            .as_deref()
            .unwrap_or(prompts::REASONER_SYSTEM_PROMPT)
    }

    /// Create a new config builder.
    pub fn builder() -> OllamaEngineConfigBuilder {
        OllamaEngineConfigBuilder::default()
    }
}

/// Builder for OllamaEngineConfig.
#[derive(Debug, Default)]
pub struct OllamaEngineConfigBuilder {
    config: OllamaEngineConfig,
}

impl OllamaEngineConfigBuilder {
    /// Set the server URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the Interviewer model.
    pub fn interviewer_model(mut self, model: impl Into<String>) -> Self {
        self.config.interviewer_model = model.into();
        self
    }

    /// Set the Reasoner model.
    pub fn reasoner_model(mut self, model: impl Into<String>) -> Self {
        self.config.reasoner_model = model.into();
        self
    }

    /// Set the Interviewer temperature.
    pub fn interviewer_temperature(mut self, temperature: f32) -> Self {
        self.config.interviewer_temperature = temperature;
        self
    }

    /// Set the Reasoner temperature.
    pub fn reasoner_temperature(mut self, temperature: f32) -> Self {
        self.config.reasoner_temperature = temperature;
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Set the Interviewer system prompt.
    pub fn interviewer_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.interviewer_prompt = Some(prompt.into());
        self
    }

    /// Set the Reasoner system prompt.
    pub fn reasoner_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.reasoner_prompt = Some(prompt.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OllamaEngineConfig {
        self.config
    }
}

/// Resolve a prompt override: env var first, then prompt file.
fn prompt_from_env(var: &str, file_var: &str) -> Option<String> {
    if let Ok(prompt) = env::var(var) {
        return Some(prompt);
    }
    env::var(file_var).ok().and_then(load_prompt_file)
}

/// Load a prompt file, returning None if not found or empty.
fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OllamaEngineConfig::default();

        assert_eq!(config.api_url, "http://127.0.0.1:11434");
        assert_eq!(config.interviewer_model, "llama3.2:3b");
        assert_eq!(config.reasoner_model, "nemotron-mini");
        assert_eq!(config.interviewer_temperature, 0.6);
        assert_eq!(config.reasoner_temperature, 0.2);
        assert_eq!(config.timeout_secs, 120);
        assert!(config.interviewer_prompt.is_none());
        assert!(config.reasoner_prompt.is_none());
    }

    #[test]
    fn test_effective_prompts_fall_back_to_embedded() {
        let config = OllamaEngineConfig::default();
        assert_eq!(
            config.effective_interviewer_prompt(),
            prompts::INTERVIEWER_SYSTEM_PROMPT
        );
        assert_eq!(
            config.effective_reasoner_prompt(),
            prompts::REASONER_SYSTEM_PROMPT
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = OllamaEngineConfig::builder()
            .api_url("http://ollama.internal:11434")
            .interviewer_model("llama3.1:8b")
            .reasoner_model("qwen2.5:7b")
            .interviewer_temperature(0.4)
            .reasoner_temperature(0.1)
            .timeout_secs(30)
            .interviewer_prompt("You are the interviewer.")
            .reasoner_prompt("You are the analyst.")
            .build();

        assert_eq!(config.api_url, "http://ollama.internal:11434");
        assert_eq!(config.interviewer_model, "llama3.1:8b");
        assert_eq!(config.reasoner_model, "qwen2.5:7b");
        assert_eq!(config.interviewer_temperature, 0.4);
        assert_eq!(config.reasoner_temperature, 0.1);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.effective_interviewer_prompt(), "You are the interviewer.");
        assert_eq!(config.effective_reasoner_prompt(), "You are the analyst.");
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are
    // process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_vars() {
            std::env::remove_var("OLLAMA_URL");
            std::env::remove_var("INTERVIEWER_MODEL");
            std::env::remove_var("REASONER_MODEL");
            std::env::remove_var("INTERVIEWER_TEMPERATURE");
            std::env::remove_var("REASONER_TEMPERATURE");
            std::env::remove_var("OLLAMA_TIMEOUT_SECS");
            std::env::remove_var("INTERVIEWER_PROMPT");
            std::env::remove_var("INTERVIEWER_PROMPT_FILE");
            std::env::remove_var("REASONER_PROMPT");
            std::env::remove_var("REASONER_PROMPT_FILE");
        }

        // Scenario 1: Nothing set, defaults used
        clear_all_vars();
        let config = OllamaEngineConfig::from_env();
        assert_eq!(config.api_url, "http://127.0.0.1:11434");
        assert_eq!(config.interviewer_model, "llama3.2:3b");

        // Scenario 2: Overrides applied
        clear_all_vars();
        std::env::set_var("OLLAMA_URL", "http://10.0.0.2:11434");
        std::env::set_var("INTERVIEWER_MODEL", "llama3.1:8b");
        std::env::set_var("INTERVIEWER_TEMPERATURE", "0.9");
        std::env::set_var("OLLAMA_TIMEOUT_SECS", "45");
        std::env::set_var("REASONER_PROMPT", "Analyze.");

        let config = OllamaEngineConfig::from_env();
        assert_eq!(config.api_url, "http://10.0.0.2:11434");
        assert_eq!(config.interviewer_model, "llama3.1:8b");
        assert_eq!(config.interviewer_temperature, 0.9);
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.effective_reasoner_prompt(), "Analyze.");

        // Scenario 3: Unparseable numbers fall back to defaults
        clear_all_vars();
        std::env::set_var("INTERVIEWER_TEMPERATURE", "warm");
        let config = OllamaEngineConfig::from_env();
        assert_eq!(config.interviewer_temperature, 0.6);

        // Cleanup
        clear_all_vars();
    }
}
