//! API configuration
//!
//! Read from `FNOL_`-prefixed environment variables; nested keys use `__`,
//! e.g. `FNOL_PORT=9000` or `FNOL_LLM__MODEL=...`. The model API key may
//! also come from `OPENAI_API_KEY`.

use infra_extraction::LlmConfig;
use serde::Deserialize;

/// Default upload limit, 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Largest accepted request body
    pub max_upload_bytes: usize,
    /// Model provider settings
    pub llm: LlmConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_json: false,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            llm: LlmConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let mut config: ApiConfig = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("FNOL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if !config.llm.has_api_key() {
            config.llm.api_key = std::env::var("OPENAI_API_KEY").ok();
        }

        Ok(config)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
