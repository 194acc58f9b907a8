use thiserror::Error;

use crate::processing::extract::ExtractError;
use crate::types::llm::LLMError;

/// Top-level error type for the summarization pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Text extraction errors
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// LLM errors
    #[error("LLM error: {0}")]
    Llm(#[from] LLMError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, Error>;
