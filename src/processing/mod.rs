//! Document processing functionality
//!
//! This module provides the document-to-prompt half of the pipeline:
//! - Media-type dispatch and per-format text extraction
//! - Summary prompt construction

/// Media-type dispatch and text extraction.
///
/// This module provides functionality for:
/// - Routing a document to the extractor matching its declared media type
/// - Extracting text from plain text, PDF, Word, spreadsheet and
///   presentation content
/// - Falling back to raw UTF-8 decoding for unrecognized types
pub mod extract;

/// Prompt construction.
///
/// This module provides functionality for:
/// - Rendering the four fixed summary-prompt templates
/// - Rendering the language-detection classification prompt
/// - Mapping ISO 639-1 codes to the language names used in prompts
pub mod prompt;

pub use extract::{get_content, ExtractError};
pub use prompt::{build_language_detection_prompt, build_prompt, language_name};
