//! Field extraction pipeline
//!
//! ```text
//! document text -> prompt -> LlmClient -> extract_json -> post_process -> ExtractedClaim
//! ```

use std::sync::Arc;

use tracing::{info, warn};

use domain_claims::ExtractedClaim;

use crate::document::read_document_bytes;
use crate::error::ExtractionError;
use crate::json::extract_json;
use crate::llm::LlmClient;
use crate::postprocess::post_process;
use crate::prompt::build_extraction_prompt;

/// Extracts FNOL fields from documents with a language model
#[derive(Clone)]
pub struct FieldExtractor {
    client: Arc<dyn LlmClient>,
}

impl FieldExtractor {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// The model client in use
    pub fn client(&self) -> &dyn LlmClient {
        self.client.as_ref()
    }

    /// Extracts fields from document text
    pub async fn extract(&self, text: &str) -> Result<ExtractedClaim, ExtractionError> {
        let prompt = build_extraction_prompt(text);

        let response = self.client.complete(&prompt).await.map_err(|e| {
            warn!(model = self.client.model(), error = %e, "LLM extraction failed");
            e
        })?;

        let fields = extract_json(&response)?;
        let claim = post_process(fields);

        info!(
            model = self.client.model(),
            document_chars = text.chars().count(),
            "Fields extracted"
        );

        Ok(claim)
    }

    /// Reads an uploaded document and extracts its fields
    pub async fn extract_document(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<ExtractedClaim, ExtractionError> {
        let text = read_document_bytes(file_name, bytes)?;
        self.extract(&text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlmClient;

    #[tokio::test]
    async fn test_extract_from_fenced_response() {
        let response = "```json\n{\"Policy Number\": \"  AUTO-1  \", \"Date\": \"N/A\"}\n```";
        let extractor = FieldExtractor::new(Arc::new(MockLlmClient::new(response)));

        let claim = extractor.extract("Policy Number: AUTO-1").await.unwrap();

        assert_eq!(claim.policy_number, "AUTO-1");
        assert_eq!(claim.date, "");
    }

    #[tokio::test]
    async fn test_extract_document_reads_text() {
        let client = Arc::new(MockLlmClient::new("{}"));
        let extractor = FieldExtractor::new(client.clone());

        extractor
            .extract_document("claim.txt", b"Location of Loss: Springfield")
            .await
            .unwrap();

        assert!(client.prompts()[0].contains("Location of Loss: Springfield"));
    }

    #[tokio::test]
    async fn test_unparsable_response() {
        let extractor = FieldExtractor::new(Arc::new(MockLlmClient::new("no data")));
        let result = extractor.extract("text").await;

        assert!(matches!(result, Err(ExtractionError::JsonParsing { .. })));
    }
}
