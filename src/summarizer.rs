use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::llm::{LLMClient, LLMParams};
use crate::processing::extract::get_content;
use crate::processing::prompt::{
    build_language_detection_prompt, build_prompt, language_name, DETECTION_SYSTEM_PROMPT,
    SUMMARY_SYSTEM_PROMPT,
};
use crate::types::document::{Document, DownloadArtifact, SummaryRequest, SummaryStyle};
use crate::types::error::{Error, Result};

/// Configuration for the summarization pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Whether to auto-detect the document language before summarizing
    pub detect_language: bool,

    /// Declared document language (ISO 639-1), used when detection is off
    pub input_language: Option<String>,

    /// Language silently substituted when detection fails
    pub fallback_language: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            detect_language: true,
            input_language: None,
            fallback_language: "en".to_string(),
        }
    }
}

/// A generated summary and the request metadata worth rendering.
///
/// Ephemeral: held only long enough to display and offer for download.
#[derive(Debug, Clone)]
pub struct SummaryOutput {
    /// The summary text, exactly as returned by the API
    pub summary: String,

    /// Model that produced the summary
    pub model: String,

    /// Number of tokens used
    pub tokens_used: usize,

    /// Detected document language, when detection ran
    pub detected_language: Option<String>,
}

impl SummaryOutput {
    /// Expose the summary as the `resume.txt` download artifact,
    /// byte-for-byte equal to the API's returned string.
    pub fn download(&self) -> DownloadArtifact {
        DownloadArtifact::from_summary(&self.summary)
    }
}

/// The document-to-summary pipeline.
///
/// Runs each request start-to-finish: optional language detection, prompt
/// construction, one completion call. Strictly sequential; at most two
/// outbound calls per request and no shared mutable state.
pub struct Summarizer {
    /// LLM client, explicitly constructed and passed in
    client: Box<dyn LLMClient>,

    /// Pipeline configuration
    config: SummarizerConfig,
}

impl Summarizer {
    /// Create a new summarizer
    pub fn new(client: Box<dyn LLMClient>, config: SummarizerConfig) -> Self {
        Self { client, config }
    }

    /// Extract a document's text and summarize it.
    pub async fn summarize_document(
        &self,
        document: &Document,
        style: SummaryStyle,
        target_language: &str,
        max_length: usize,
    ) -> Result<SummaryOutput> {
        let text = get_content(document)?;
        self.summarize(&SummaryRequest {
            text,
            style,
            target_language: target_language.to_string(),
            max_length,
        })
        .await
    }

    /// Summarize already-extracted text.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryOutput> {
        if request.text.trim().is_empty() {
            return Err(Error::InvalidInput("empty document text".to_string()));
        }

        let detected_language = if self.config.detect_language {
            Some(self.detect_language(&request.text).await)
        } else {
            None
        };

        let input_language = detected_language
            .clone()
            .or_else(|| self.config.input_language.clone());

        // A translation instruction is prefixed only when the document
        // language is known and differs from the requested output language
        let translate = input_language
            .as_deref()
            .is_some_and(|lang| lang != request.target_language);

        let prompt = build_prompt(
            &request.text,
            request.style,
            language_name(&request.target_language),
            request.max_length,
            translate,
        );

        let params = LLMParams {
            system_prompt: Some(SUMMARY_SYSTEM_PROMPT.to_string()),
            ..LLMParams::default()
        };

        let response = self.client.complete(&prompt, &params).await?;
        info!(
            model = %response.model,
            tokens_used = response.tokens_used,
            "summary generated"
        );

        Ok(SummaryOutput {
            summary: response.text,
            model: response.model,
            tokens_used: response.tokens_used,
            detected_language,
        })
    }

    /// Detect the document language with a deterministic, two-token
    /// classification call. Failures are not surfaced: the configured
    /// fallback language is substituted instead.
    async fn detect_language(&self, text: &str) -> String {
        let params = LLMParams {
            max_tokens: 2,
            temperature: 0.0,
            system_prompt: Some(DETECTION_SYSTEM_PROMPT.to_string()),
            ..LLMParams::default()
        };

        match self
            .client
            .complete(&build_language_detection_prompt(text), &params)
            .await
        {
            Ok(response) => {
                let code = response.text.trim().to_ascii_lowercase();
                debug!(language = %code, "detected document language");
                code
            }
            Err(e) => {
                debug!(error = %e, fallback = %self.config.fallback_language, "language detection failed, using fallback");
                self.config.fallback_language.clone()
            }
        }
    }
}
