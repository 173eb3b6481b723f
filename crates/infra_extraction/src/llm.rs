//! Language model clients
//!
//! [`LlmClient`] is the seam between extraction and the model provider.
//! [`OpenAiCompatClient`] talks to any OpenAI-compatible
//! `/chat/completions` endpoint; [`MockLlmClient`] returns canned answers
//! for tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ExtractionError;

/// Connection settings for the model provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Bearer token
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion length limit
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.sambanova.ai/v1".to_string(),
            api_key: None,
            model: "Meta-Llama-3.1-8B-Instruct".to_string(),
            temperature: 0.1,
            max_tokens: 2000,
            timeout_secs: 60,
        }
    }
}

impl LlmConfig {
    /// Returns true if an API key is set
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

/// A text completion backend
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one user prompt and returns the model's answer
    async fn complete(&self, prompt: &str) -> Result<String, ExtractionError>;

    /// Name of the model answering
    fn model(&self) -> &str;

    /// Returns true if the client can be expected to answer
    fn is_ready(&self) -> bool {
        true
    }
}

/// Client for OpenAI-compatible chat completion APIs
pub struct OpenAiCompatClient {
    config: LlmConfig,
    endpoint: String,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    /// Creates a client from configuration
    pub fn new(config: LlmConfig) -> Result<Self, ExtractionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ExtractionError::LlmTransport(e.to_string()))?;

        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));

        Ok(Self {
            config,
            endpoint,
            client,
        })
    }

    /// Returns the completion endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[async_trait]
impl LlmClient for OpenAiCompatClient {
    async fn complete(&self, prompt: &str) -> Result<String, ExtractionError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ExtractionError::LlmConnection(self.config.base_url.clone())
            } else if e.is_timeout() {
                ExtractionError::LlmTransport(format!(
                    "Request timed out after {}s",
                    self.config.timeout_secs
                ))
            } else {
                ExtractionError::LlmTransport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractionError::LlmStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::LlmTransport(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ExtractionError::EmptyResponse)?;

        debug!(model = %self.config.model, chars = content.len(), "LLM completion received");

        Ok(content)
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn is_ready(&self) -> bool {
        self.config.has_api_key()
    }
}

/// Mock client for testing, answers every prompt the same way
pub struct MockLlmClient {
    response: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    /// Answers every prompt with `response`
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fails every request with a transport error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, ExtractionError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        self.response
            .clone()
            .map_err(ExtractionError::LlmTransport)
    }

    fn model(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();
        assert_eq!(config.base_url, "https://api.sambanova.ai/v1");
        assert_eq!(config.model, "Meta-Llama-3.1-8B-Instruct");
        assert_eq!(config.max_tokens, 2000);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_blank_api_key_is_not_a_key() {
        let config = LlmConfig {
            api_key: Some("  ".to_string()),
            ..LlmConfig::default()
        };
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = OpenAiCompatClient::new(LlmConfig {
            base_url: "http://localhost:9000/v1/".to_string(),
            ..LlmConfig::default()
        })
        .unwrap();

        assert_eq!(client.endpoint(), "http://localhost:9000/v1/chat/completions");
        assert!(!client.is_ready());
    }

    #[test]
    fn test_chat_response_parsing() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"{}"}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_mock_records_prompts() {
        let client = MockLlmClient::new("{}");

        assert_eq!(client.complete("first").await.unwrap(), "{}");
        assert_eq!(client.prompts(), vec!["first".to_string()]);
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let client = MockLlmClient::failing("connection reset");
        let result = client.complete("prompt").await;

        assert!(matches!(result, Err(ExtractionError::LlmTransport(m)) if m == "connection reset"));
    }

    #[tokio::test]
    async fn test_unreachable_provider() {
        let client = OpenAiCompatClient::new(LlmConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 5,
            ..LlmConfig::default()
        })
        .unwrap();

        let result = client.complete("prompt").await;
        assert!(matches!(
            result,
            Err(ExtractionError::LlmConnection(_)) | Err(ExtractionError::LlmTransport(_))
        ));
    }
}
