//! Generative model client module
//!
//! Provides blocking completion requests against the Gemini API. No
//! streaming: the pipeline consumes full-text responses only.

pub mod client;
mod error;
mod gemini;

pub use client::LlmClient;
pub use error::LlmError;
pub use gemini::GeminiClient;

/// A completion request - everything needed for one model call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The full rendered prompt
    pub prompt: String,

    /// Max tokens for the response (from config)
    pub max_tokens: u32,
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Raw generated text, absent when the model returned no candidates
    pub content: Option<String>,

    /// Token usage for cost tracking
    pub usage: TokenUsage,
}

impl CompletionResponse {
    /// A plain text response with no usage accounting
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            usage: TokenUsage::default(),
        }
    }
}

/// Token usage for cost tracking
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}
