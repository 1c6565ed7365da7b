//! The trip-planning pipeline
//!
//! Wires the four stages together: request validation, search
//! aggregation, prompt construction, plan generation. Single-threaded and
//! strictly sequential; each run builds fresh intermediate values and
//! shares nothing with other runs, so repeated identical requests repeat
//! all network calls (an accepted property, not a defect).

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::PipelineConfig;
use crate::generate::{GenerateError, PlanGenerator};
use crate::llm::{GeminiClient, LlmClient};
use crate::plan::TravelPlan;
use crate::prompts::{PromptBuilder, PromptError};
use crate::search::{SearchAggregator, SearchProvider, SerpApiClient};
use crate::trip::{TripError, TripRequest};

/// Errors surfaced by one pipeline run
///
/// Search failures never appear here: the aggregator absorbs them. The
/// only failure shapes a caller sees are an invalid request, a template
/// problem, a spent generation budget, or a client that could not be
/// constructed.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Request(#[from] TripError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Generation(#[from] GenerateError),

    #[error("failed to build pipeline clients: {0}")]
    Setup(String),
}

/// The trip-planning pipeline
///
/// Construct once per configuration; run any number of independent
/// requests through [`TripPlanner::plan`].
pub struct TripPlanner {
    aggregator: SearchAggregator,
    prompts: PromptBuilder,
    generator: PlanGenerator,
}

impl TripPlanner {
    /// Build a planner with the real SerpApi and Gemini clients
    ///
    /// Both credentials must already be present: run
    /// [`PipelineConfig::validate`] at the calling layer first, this
    /// constructor does not re-check.
    pub fn new(config: &PipelineConfig) -> Result<Self, PlanError> {
        debug!("TripPlanner::new: called");
        let search: Arc<dyn SearchProvider> = Arc::new(
            SerpApiClient::from_config(&config.search).map_err(|e| PlanError::Setup(e.to_string()))?,
        );
        let llm: Arc<dyn LlmClient> = Arc::new(
            GeminiClient::from_config(&config.llm).map_err(|e| PlanError::Setup(e.to_string()))?,
        );

        Ok(Self::with_clients(config, search, llm))
    }

    /// Build a planner with injected clients
    pub fn with_clients(
        config: &PipelineConfig,
        search: Arc<dyn SearchProvider>,
        llm: Arc<dyn LlmClient>,
    ) -> Self {
        debug!("TripPlanner::with_clients: called");
        Self {
            aggregator: SearchAggregator::new(search),
            prompts: PromptBuilder::new(),
            generator: PlanGenerator::new(llm, config.llm.max_tokens),
        }
    }

    /// Run one request through the pipeline
    ///
    /// Stages run strictly in order, each completing before the next
    /// begins. There is no cancellation: a run goes to completion or to
    /// its terminal error.
    #[tracing::instrument(skip_all, fields(run_id = %Uuid::now_v7(), destination = %trip.destination))]
    pub async fn plan(&self, trip: &TripRequest) -> Result<TravelPlan, PlanError> {
        trip.validate()?;
        info!(duration_days = %trip.duration, group = %trip.group, "plan: starting run");

        let snippets = self.aggregator.aggregate(trip).await;
        debug!(sparse_context = %snippets.is_empty(), "plan: search aggregation complete");

        let prompt = self.prompts.build(trip, &snippets)?;
        debug!(prompt_len = %prompt.len(), "plan: prompt built");

        let plan = self.generator.generate(&prompt).await?;
        info!("plan: run complete");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::CompletionResponse;
    use crate::llm::client::mock::MockLlmClient;
    use crate::search::mock::MockSearchProvider;
    use crate::trip::TravelerGroup;

    const MINIMAL_PLAN: &str = r#"{
        "hero_hook": "Sun, Sand, Spice",
        "summary": "Three lazy days.",
        "vibe_events": [],
        "transport": [],
        "stay": [],
        "itinerary": [],
        "costs": { "transport": "0", "stay": "0", "food": "0", "shopping_misc": "0", "total": "0" }
    }"#;

    fn goa_request() -> TripRequest {
        TripRequest::new(
            "Goa",
            "Mumbai",
            3,
            20000.0,
            "₹",
            TravelerGroup::Solo,
            "street food",
            "",
            false,
        )
        .unwrap()
    }

    fn planner(search: Arc<MockSearchProvider>, llm: Arc<MockLlmClient>) -> TripPlanner {
        TripPlanner::with_clients(&PipelineConfig::default(), search, llm)
    }

    #[tokio::test]
    async fn test_run_survives_total_search_failure() {
        let search = Arc::new(MockSearchProvider::failing());
        let llm = Arc::new(MockLlmClient::new(vec![Ok(CompletionResponse::text(
            MINIMAL_PLAN,
        ))]));

        let plan = planner(search.clone(), llm).plan(&goa_request()).await.unwrap();

        assert_eq!(plan.hero_hook, "Sun, Sand, Spice");
        assert!(plan.budget_tip.is_none());
        assert_eq!(search.call_count(), 3);
    }

    #[tokio::test]
    async fn test_invalid_request_fails_before_any_io() {
        let search = Arc::new(MockSearchProvider::failing());
        let llm = Arc::new(MockLlmClient::new(vec![]));
        let planner = planner(search.clone(), llm.clone());

        let mut trip = goa_request();
        trip.destination = String::new();

        let err = planner.plan(&trip).await.unwrap_err();
        assert!(matches!(err, PlanError::Request(TripError::EmptyDestination)));
        assert_eq!(search.call_count(), 0);
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generation_exhaustion_surfaces_fixed_message() {
        let search = Arc::new(MockSearchProvider::new(vec![]));
        let llm = Arc::new(MockLlmClient::new(vec![]));

        let err = planner(search, llm).plan(&goa_request()).await.unwrap_err();

        assert_eq!(err.to_string(), "AI is taking a break. Please try again.");
        assert!(matches!(err, PlanError::Generation(_)));
    }

    #[tokio::test]
    async fn test_new_builds_real_clients_from_config() {
        let config = PipelineConfig::default();
        assert!(TripPlanner::new(&config).is_ok());
    }
}
