//! End-to-end pipeline scenarios through the public API
//!
//! Stub providers live here rather than in the crate: anything these
//! tests reach for has to be constructible from the outside.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use vibetrip::{
    CompletionRequest, CompletionResponse, LlmClient, LlmError, PipelineConfig, PlanError,
    SearchError, SearchHit, SearchProvider, TravelerGroup, TripPlanner, TripRequest,
};

/// Route pipeline diagnostics to the test output when RUST_LOG is set
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A search provider that finds nothing
struct EmptySearch;

#[async_trait]
impl SearchProvider for EmptySearch {
    async fn search(&self, _query: &str) -> Result<Vec<SearchHit>, SearchError> {
        Ok(Vec::new())
    }
}

/// A model that replays scripted outcomes, then fails
struct ScriptedModel {
    outcomes: Mutex<Vec<Result<String, String>>>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    fn new(outcomes: Vec<Result<String, String>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes),
            calls: AtomicUsize::new(0),
        }
    }

    fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for ScriptedModel {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(LlmError::InvalidResponse("scripted failure".to_string()));
        }
        match outcomes.remove(0) {
            Ok(text) => Ok(CompletionResponse::text(text)),
            Err(message) => Err(LlmError::InvalidResponse(message)),
        }
    }
}

const GOA_PLAN_JSON: &str = r#"{"hero_hook":"Sun, Sand, Spice","summary":"...","vibe_events":[],"transport":[],"stay":[],"itinerary":[],"costs":{"transport":"0","stay":"0","food":"0","shopping_misc":"0","total":"0"}}"#;

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

fn planner(llm: Arc<dyn LlmClient>) -> TripPlanner {
    TripPlanner::with_clients(&PipelineConfig::default(), Arc::new(EmptySearch), llm)
}

#[tokio::test]
async fn goa_scenario_yields_success_with_sparse_context() {
    init_tracing();
    let model = Arc::new(ScriptedModel::new(vec![Ok(GOA_PLAN_JSON.to_string())]));

    let plan = planner(model.clone()).plan(&goa_request()).await.unwrap();

    assert_eq!(plan.hero_hook, "Sun, Sand, Spice");
    assert!(plan.budget_tip.is_none());
    assert!(plan.vibe_events.is_empty());
    assert!(plan.transport.is_empty());
    assert!(plan.stay.is_empty());
    assert!(plan.itinerary.is_empty());
    assert_eq!(plan.costs.total, "0");
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn fenced_model_output_parses_like_plain_output() {
    init_tracing();
    let fenced = Arc::new(ScriptedModel::new(vec![Ok(format!(
        "```json\n{}\n```",
        GOA_PLAN_JSON
    ))]));
    let plain = Arc::new(ScriptedModel::new(vec![Ok(GOA_PLAN_JSON.to_string())]));

    let from_fenced = planner(fenced).plan(&goa_request()).await.unwrap();
    let from_plain = planner(plain).plan(&goa_request()).await.unwrap();

    assert_eq!(from_fenced, from_plain);
}

#[tokio::test]
async fn failed_first_attempt_recovers_on_the_second() {
    init_tracing();
    let model = Arc::new(ScriptedModel::new(vec![
        Err("overloaded".to_string()),
        Ok(GOA_PLAN_JSON.to_string()),
    ]));

    let plan = planner(model.clone()).plan(&goa_request()).await.unwrap();

    assert_eq!(plan.hero_hook, "Sun, Sand, Spice");
    assert_eq!(model.call_count(), 2);
}

#[tokio::test]
async fn persistent_model_failure_surfaces_the_fixed_message() {
    init_tracing();
    let model = Arc::new(ScriptedModel::always_failing());

    let err = planner(model.clone()).plan(&goa_request()).await.unwrap_err();

    assert_eq!(err.to_string(), "AI is taking a break. Please try again.");
    assert!(matches!(err, PlanError::Generation(_)));
    assert_eq!(model.call_count(), 2);
}

#[tokio::test]
async fn identical_requests_repeat_the_model_call() {
    init_tracing();
    // No caching across runs: two runs mean two completions
    let model = Arc::new(ScriptedModel::new(vec![
        Ok(GOA_PLAN_JSON.to_string()),
        Ok(GOA_PLAN_JSON.to_string()),
    ]));
    let planner = planner(model.clone());

    let request = goa_request();
    planner.plan(&request).await.unwrap();
    planner.plan(&request).await.unwrap();

    assert_eq!(model.call_count(), 2);
}
