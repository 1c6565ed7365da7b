//! LLM error types

use thiserror::Error;

/// Errors that can occur during model calls
///
/// None of these cross the plan generator's boundary: the generator
/// absorbs them into its retry budget and surfaces a single terminal
/// error when that budget is spent.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
