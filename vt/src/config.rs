//! Pipeline configuration types
//!
//! Configuration is an explicit object handed to the pipeline constructor,
//! scoped to one pipeline instance. There is no config-file loading; the
//! embedding application owns where these values come from.

use eyre::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable holding the search provider key
pub const SEARCH_KEY_ENV: &str = "SERPAPI_KEY";

/// Environment variable holding the model provider key
pub const MODEL_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration for one pipeline instance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Search provider configuration
    pub search: SearchConfig,

    /// Generative model configuration
    pub llm: LlmConfig,
}

impl PipelineConfig {
    /// Validate configuration before use
    ///
    /// The calling layer runs this before constructing a pipeline: a run
    /// must not start without both credentials present. Fails fast with a
    /// clear message naming the missing key.
    pub fn validate(&self) -> Result<()> {
        if self.search.api_key.trim().is_empty() {
            return Err(eyre::eyre!(
                "search API key is missing. Set SearchConfig.api_key (or the {} environment variable).",
                SEARCH_KEY_ENV
            ));
        }
        if self.llm.api_key.trim().is_empty() {
            return Err(eyre::eyre!(
                "model API key is missing. Set LlmConfig.api_key (or the {} environment variable).",
                MODEL_KEY_ENV
            ));
        }
        Ok(())
    }

    /// Load both credentials from environment variables
    ///
    /// Returns None when either key is unset; everything else keeps its
    /// default.
    pub fn from_env() -> Option<Self> {
        debug!("PipelineConfig::from_env: called");
        Some(Self {
            search: SearchConfig::from_env()?,
            llm: LlmConfig::from_env()?,
        })
    }
}

/// Search provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// API key, supplied by the caller
    #[serde(rename = "api-key")]
    pub api_key: String,

    /// Engine identifier sent with every query
    pub engine: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Organic results fetched per query
    #[serde(rename = "result-limit")]
    pub result_limit: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            engine: "google".to_string(),
            base_url: "https://serpapi.com".to_string(),
            result_limit: 4,
            timeout_ms: 20_000,
        }
    }
}

impl SearchConfig {
    /// Load the API key from the environment, defaults for the rest
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(SEARCH_KEY_ENV).ok()?;
        debug!("SearchConfig::from_env: key found");
        Some(Self {
            api_key,
            ..Self::default()
        })
    }
}

/// Generative model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API key, supplied by the caller
    #[serde(rename = "api-key")]
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-flash-latest".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_tokens: 8192,
            timeout_ms: 60_000,
        }
    }
}

impl LlmConfig {
    /// Load the API key from the environment, defaults for the rest
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(MODEL_KEY_ENV).ok()?;
        debug!("LlmConfig::from_env: key found");
        Some(Self {
            api_key,
            ..Self::default()
        })
    }
}
