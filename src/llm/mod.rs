// Re-export common types from types module
pub use crate::types::llm::{LLMClient, LLMConfig, LLMError, LLMParams, LLMResponse};

/// OpenAI API client implementation.
///
/// Provides the single outbound chat-completion call used for both
/// summarization and language detection.
pub mod openai;

pub use openai::OpenAIClient;
