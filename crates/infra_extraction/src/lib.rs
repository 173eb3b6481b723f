//! FNOL Extraction Infrastructure
//!
//! Turns uploaded FNOL documents into [`domain_claims::ExtractedClaim`]s:
//!
//! - [`document`]: reads PDFs page by page and text files in UTF-8 or Latin-1
//! - [`prompt`]: builds the extraction prompt
//! - [`llm`]: the [`LlmClient`] seam and an OpenAI-compatible client
//! - [`json`]: recovers a JSON object from chatty model output
//! - [`postprocess`]: normalizes the recovered fields
//! - [`extractor`]: the pipeline tying it together
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_extraction::{FieldExtractor, LlmConfig, OpenAiCompatClient};
//!
//! let client = OpenAiCompatClient::new(LlmConfig::default())?;
//! let extractor = FieldExtractor::new(Arc::new(client));
//! let claim = extractor.extract_document("claim.pdf", &bytes).await?;
//! ```

pub mod document;
pub mod prompt;
pub mod llm;
pub mod json;
pub mod postprocess;
pub mod extractor;
pub mod error;

pub use document::{read_document, read_document_bytes};
pub use prompt::build_extraction_prompt;
pub use llm::{LlmClient, LlmConfig, MockLlmClient, OpenAiCompatClient};
pub use json::extract_json;
pub use postprocess::post_process;
pub use extractor::FieldExtractor;
pub use error::ExtractionError;
