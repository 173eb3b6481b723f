//! Extraction error types
//!
//! Errors raised while turning an uploaded document into an extracted
//! claim: reading the file, calling the language model, and recovering
//! JSON from its answer.

use thiserror::Error;

/// Number of response characters quoted in JSON parsing errors
pub const RESPONSE_EXCERPT_CHARS: usize = 500;

/// Errors that can occur during document reading and field extraction
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The document does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Reading the document failed
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The PDF could not be parsed
    #[error("Error reading PDF: {0}")]
    PdfParsing(String),

    /// The model provider could not be reached
    #[error("Cannot connect to LLM provider at {0}")]
    LlmConnection(String),

    /// The request to the model provider failed
    #[error("LLM request failed: {0}")]
    LlmTransport(String),

    /// The model provider answered with an error status
    #[error("LLM provider returned status {status}: {body}")]
    LlmStatus { status: u16, body: String },

    /// The model returned no content
    #[error("Empty response from model")]
    EmptyResponse,

    /// No JSON object could be recovered from the model output
    #[error("Could not parse JSON from response. Error: {reason}\nResponse: {excerpt}")]
    JsonParsing { reason: String, excerpt: String },
}

impl ExtractionError {
    /// Creates a JSON parsing error quoting the start of the response
    pub fn json_parsing(reason: impl Into<String>, response: &str) -> Self {
        Self::JsonParsing {
            reason: reason.into(),
            excerpt: response.chars().take(RESPONSE_EXCERPT_CHARS).collect(),
        }
    }

    /// Returns true if the error comes from the document itself rather than
    /// from the model provider
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            ExtractionError::FileNotFound(_) | ExtractionError::Io(_) | ExtractionError::PdfParsing(_)
        )
    }
}
