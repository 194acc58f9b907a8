use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::error::Error;

/// File name of the downloadable summary artifact.
pub const DOWNLOAD_FILE_NAME: &str = "resume.txt";

/// MIME type of the downloadable summary artifact.
pub const DOWNLOAD_MIME_TYPE: &str = "text/plain";

/// Supported document media types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    /// Plain text (.txt)
    PlainText,
    /// PDF files (.pdf)
    Pdf,
    /// Word documents (.docx)
    Word,
    /// Legacy Excel workbooks (.xls)
    ExcelLegacy,
    /// Excel workbooks (.xlsx)
    Excel,
    /// Legacy PowerPoint presentations (.ppt)
    PowerPointLegacy,
    /// PowerPoint presentations (.pptx)
    PowerPoint,
    /// Any other declared type; extraction falls back to raw UTF-8 decoding
    Other(String),
}

impl MediaType {
    /// Resolve a declared media-type string to a [`MediaType`].
    ///
    /// Accepts MIME identifiers and bare file extensions. Unrecognized
    /// values map to [`MediaType::Other`], which the dispatcher handles by
    /// decoding the raw bytes as UTF-8.
    pub fn from_declared(declared: &str) -> Self {
        match declared.trim().to_ascii_lowercase().as_str() {
            "text/plain" | "txt" => Self::PlainText,
            "application/pdf" | "pdf" => Self::Pdf,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            | "docx" => Self::Word,
            "application/vnd.ms-excel" | "xls" => Self::ExcelLegacy,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" | "xlsx" => {
                Self::Excel
            }
            "application/vnd.ms-powerpoint" | "ppt" => Self::PowerPointLegacy,
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            | "pptx" => Self::PowerPoint,
            _ => Self::Other(declared.to_string()),
        }
    }
}

/// An uploaded document: raw bytes plus the declared media type.
///
/// Immutable once received; discarded after extraction.
#[derive(Debug, Clone)]
pub struct Document {
    /// Raw byte content, read fully into memory
    pub content: Vec<u8>,
    /// Declared media type used to select an extractor
    pub media_type: MediaType,
}

impl Document {
    /// Create a document from raw bytes and an already-resolved media type.
    pub fn new(content: Vec<u8>, media_type: MediaType) -> Self {
        Self {
            content,
            media_type,
        }
    }

    /// Create a document from raw bytes and a declared media-type string.
    pub fn from_declared(content: Vec<u8>, declared: &str) -> Self {
        Self::new(content, MediaType::from_declared(declared))
    }
}

/// Summary rendering styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    /// Simplified, accessible-language summary
    Vulgarized,
    /// Summary emphasizing technical and methodological content
    Technical,
    /// Bulleted list of key points
    Bullets,
    /// Strategic, conclusions-focused executive summary
    Executive,
}

impl FromStr for SummaryStyle {
    type Err = Error;

    /// Parse a style name. Undefined styles are a configuration error,
    /// never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vulgarized" => Ok(Self::Vulgarized),
            "technical" => Ok(Self::Technical),
            "bullets" => Ok(Self::Bullets),
            "executive" => Ok(Self::Executive),
            other => Err(Error::Config(format!("unknown summary style: {}", other))),
        }
    }
}

/// A single summarization request.
///
/// Exactly one style, one target language and one length budget; there is
/// no batching.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    /// Extracted text to summarize
    pub text: String,
    /// Summary rendering style
    pub style: SummaryStyle,
    /// ISO 639-1 code of the language the summary must be written in
    pub target_language: String,
    /// Length budget: words, or bullet count for [`SummaryStyle::Bullets`]
    pub max_length: usize,
}

/// A downloadable rendering of a generated summary.
///
/// The content is byte-for-byte the string returned by the API, with no
/// post-processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    /// Suggested file name
    pub file_name: String,
    /// MIME type of the artifact
    pub mime_type: String,
    /// File content
    pub content: Vec<u8>,
}

impl DownloadArtifact {
    /// Wrap a summary string as the `resume.txt` download artifact.
    pub fn from_summary(summary: &str) -> Self {
        Self {
            file_name: DOWNLOAD_FILE_NAME.to_string(),
            mime_type: DOWNLOAD_MIME_TYPE.to_string(),
            content: summary.as_bytes().to_vec(),
        }
    }
}
