use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::llm::{LLMClient, LLMConfig, LLMError, LLMParams, LLMResponse};

/// OpenAI chat-completion response format
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    total_tokens: usize,
}

/// OpenAI client implementation.
///
/// Explicitly constructed from a passed-in [`LLMConfig`]; no ambient
/// global state. Each call is a single round trip with no retries.
pub struct OpenAIClient {
    /// HTTP client
    client: Client,

    /// Client configuration
    config: LLMConfig,
}

impl OpenAIClient {
    /// Create a new OpenAI client
    pub fn new(config: LLMConfig) -> Result<Self, LLMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LLMError::ConfigError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the API request URL
    fn build_url(&self) -> Result<String, LLMError> {
        let endpoint = self
            .config
            .api_endpoint
            .as_ref()
            .ok_or_else(|| LLMError::ConfigError("API endpoint not configured".to_string()))?;

        Ok(format!("{}/v1/chat/completions", endpoint))
    }

    /// Build request headers
    fn build_headers(&self) -> Result<reqwest::header::HeaderMap, LLMError> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| LLMError::ConfigError("API key not configured".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| LLMError::ConfigError(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(org_id) = &self.config.org_id {
            headers.insert(
                "OpenAI-Organization",
                HeaderValue::from_str(org_id).map_err(|e| LLMError::ConfigError(e.to_string()))?,
            );
        }

        Ok(headers)
    }

    /// Build the ordered system + user message list
    fn build_messages(&self, prompt: &str, params: &LLMParams) -> Vec<serde_json::Value> {
        let mut messages = Vec::new();

        if let Some(system_prompt) = &params.system_prompt {
            messages.push(json!({
                "role": "system",
                "content": system_prompt
            }));
        }

        messages.push(json!({
            "role": "user",
            "content": prompt
        }));

        messages
    }
}

#[async_trait]
impl LLMClient for OpenAIClient {
    async fn complete(&self, prompt: &str, params: &LLMParams) -> Result<LLMResponse, LLMError> {
        let url = self.build_url()?;
        let headers = self.build_headers()?;

        let mut request_body = json!({
            "model": self.config.model,
            "messages": self.build_messages(prompt, params),
            "temperature": params.temperature,
            "top_p": params.top_p,
            "max_tokens": params.max_tokens,
        });

        // Add extra parameters
        for (key, value) in &params.extra_params {
            request_body[key] = serde_json::Value::String(value.clone());
        }

        debug!(model = %self.config.model, max_tokens = params.max_tokens, "sending completion request");

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LLMError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LLMError::RequestFailed(
                response.text().await.unwrap_or_default(),
            ));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LLMError::InvalidResponse(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::InvalidResponse("response contains no choices".to_string()))?;

        Ok(LLMResponse {
            text: choice.message.content,
            tokens_used: completion.usage.map(|u| u.total_tokens).unwrap_or(0),
            model: completion.model,
        })
    }

    fn get_config(&self) -> &LLMConfig {
        &self.config
    }
}
