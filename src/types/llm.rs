use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LLMError {
    /// API request failed
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Invalid response format
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Parameters for LLM requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMParams {
    /// Maximum number of tokens to generate
    pub max_tokens: usize,

    /// Temperature for generation (0.0 to 1.0)
    pub temperature: f32,

    /// Top-p sampling parameter
    pub top_p: f32,

    /// System prompt (if supported by model)
    pub system_prompt: Option<String>,

    /// Additional model-specific parameters
    pub extra_params: HashMap<String, String>,
}

impl Default for LLMParams {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.7,
            top_p: 1.0,
            system_prompt: None,
            extra_params: HashMap::new(),
        }
    }
}

/// Configuration for LLM clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    /// Model identifier/name
    pub model: String,

    /// API endpoint
    pub api_endpoint: Option<String>,

    /// API key (supplied out-of-band, never hardcoded)
    pub api_key: Option<String>,

    /// Organization ID (if applicable)
    pub org_id: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Additional configuration parameters
    pub extra_config: HashMap<String, String>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            model: String::from("gpt-3.5-turbo"),
            api_endpoint: Some(String::from("https://api.openai.com")),
            api_key: None,
            org_id: None,
            timeout_secs: 30,
            extra_config: HashMap::new(),
        }
    }
}

impl LLMConfig {
    /// Load configuration from environment variables at process start.
    ///
    /// Reads `OPENAI_API_KEY` (or `LLM_API_KEY`), and optional overrides
    /// `LLM_MODEL`, `LLM_API_BASE`, `LLM_ORG_ID`, `LLM_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.api_key = std::env::var("OPENAI_API_KEY")
            .or_else(|_| std::env::var("LLM_API_KEY"))
            .ok();

        if let Ok(model) = std::env::var("LLM_MODEL") {
            config.model = model;
        }
        if let Ok(api_base) = std::env::var("LLM_API_BASE") {
            config.api_endpoint = Some(api_base);
        }
        if let Ok(org_id) = std::env::var("LLM_ORG_ID") {
            config.org_id = Some(org_id);
        }
        if let Ok(timeout) = std::env::var("LLM_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.timeout_secs = secs;
            }
        }

        config
    }
}

/// Response from LLM generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    /// Generated text
    pub text: String,

    /// Number of tokens used
    pub tokens_used: usize,

    /// Model used for generation
    pub model: String,
}

/// Trait for LLM clients
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Send one prompt to the completion endpoint and return the generated
    /// text. A single blocking round trip; no retries, no streaming.
    async fn complete(&self, prompt: &str, params: &LLMParams) -> Result<LLMResponse, LLMError>;

    /// Get the current configuration
    fn get_config(&self) -> &LLMConfig;
}
