//! Common types and configuration structures.
//!
//! Contains:
//! - Error types and Result aliases
//! - Document and media-type definitions
//! - LLM configuration and request/response types

/// Error types and the crate-level Result alias.
pub mod error;

/// Document, media-type, summary-style and download-artifact types.
pub mod document;

/// LLM client configuration, parameters, responses and errors.
pub mod llm;

pub use document::{Document, DownloadArtifact, MediaType, SummaryRequest, SummaryStyle};
pub use error::{Error, Result};
