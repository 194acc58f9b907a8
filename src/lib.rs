//! docsum - multi-format document summarization through OpenAI-compatible
//! chat models
//!
//! This library extracts text from uploaded documents (plain text, PDF,
//! Word, spreadsheets, presentations), renders one of four fixed
//! summary-prompt templates and performs a single chat-completion call,
//! returning the summary and a downloadable `resume.txt` artifact.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Module declarations
/// Processing module for extraction and prompt construction.
///
/// Provides:
/// - Media-type dispatch over the supported document formats
/// - Per-format text extractors
/// - The four summary-prompt templates and the detection prompt
pub mod processing;

/// LLM module for language model operations.
///
/// Provides:
/// - The LLM client seam
/// - The OpenAI chat-completions implementation
pub mod llm;

/// Common types and configuration structures.
///
/// Contains:
/// - Error types and Result aliases
/// - Document, media-type and summary-request types
/// - LLM configuration structures
pub mod types;

/// Pipeline orchestration: detection, prompt construction, completion.
pub mod summarizer;

pub use llm::{LLMClient, LLMConfig, LLMError, LLMParams, LLMResponse, OpenAIClient};
pub use processing::{build_prompt, get_content, ExtractError};
pub use summarizer::{Summarizer, SummarizerConfig, SummaryOutput};
pub use types::{Document, DownloadArtifact, Error, MediaType, Result, SummaryRequest, SummaryStyle};
