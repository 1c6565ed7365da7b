//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless model client - each call is one independent completion
///
/// No conversation state is kept between calls. The plan generator sends
/// the identical prompt for every attempt of a run, so a client must not
/// retry internally: the attempt budget is owned by the generator and has
/// to stay observable there.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request (blocking until the full text arrives)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
