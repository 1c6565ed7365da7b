//! Plan generation
//!
//! Sends the rendered prompt to the model, strips formatting artifacts,
//! and parses the reply into a typed [`TravelPlan`]. Two attempts total
//! with the identical prompt and no backoff; when both fail the caller
//! gets a single terminal error carrying the user-facing message, while
//! each attempt's actual cause goes to the log.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::llm::{CompletionRequest, LlmClient, LlmError};
use crate::plan::TravelPlan;

/// Total attempts per run
const MAX_ATTEMPTS: u32 = 2;

/// Message shown to the user when every attempt failed
pub const UNAVAILABLE_MESSAGE: &str = "AI is taking a break. Please try again.";

/// Terminal plan-generation failure
///
/// The display text is the user-facing contract; diagnostics never ride
/// along on this type, they are logged per attempt instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("{}", UNAVAILABLE_MESSAGE)]
    Exhausted { attempts: u32 },
}

/// Cause of a single failed attempt (logged, never surfaced)
#[derive(Debug, Error)]
enum AttemptError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("model returned no text")]
    EmptyResponse,

    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Generates travel plans from rendered prompts
pub struct PlanGenerator {
    llm: Arc<dyn LlmClient>,
    max_tokens: u32,
}

impl PlanGenerator {
    pub fn new(llm: Arc<dyn LlmClient>, max_tokens: u32) -> Self {
        debug!(%max_tokens, "PlanGenerator::new: called");
        Self { llm, max_tokens }
    }

    /// Generate a plan from one rendered prompt
    ///
    /// Never panics and never lets a provider or parse error cross this
    /// boundary: the only failure shape is [`GenerateError::Exhausted`].
    pub async fn generate(&self, prompt: &str) -> Result<TravelPlan, GenerateError> {
        debug!(prompt_len = %prompt.len(), "PlanGenerator::generate: called");

        for attempt in 1..=MAX_ATTEMPTS {
            match self.attempt(prompt).await {
                Ok(plan) => {
                    debug!(%attempt, "generate: success");
                    return Ok(plan);
                }
                Err(e) => {
                    warn!(%attempt, error = %e, "generate: attempt failed");
                }
            }
        }

        warn!(attempts = %MAX_ATTEMPTS, "generate: retry budget spent");
        Err(GenerateError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// One model call plus parse
    async fn attempt(&self, prompt: &str) -> Result<TravelPlan, AttemptError> {
        let request = CompletionRequest {
            prompt: prompt.to_string(),
            max_tokens: self.max_tokens,
        };

        let response = self.llm.complete(request).await?;
        debug!(
            input_tokens = %response.usage.input_tokens,
            output_tokens = %response.usage.output_tokens,
            "attempt: completion received"
        );

        let text = response.content.ok_or(AttemptError::EmptyResponse)?;
        let clean = strip_code_fences(&text);
        let plan = serde_json::from_str(&clean)?;
        Ok(plan)
    }
}

/// Remove code-fence markers the model may have wrapped the JSON in
///
/// Idempotent, and lossless for the JSON payload itself.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}
