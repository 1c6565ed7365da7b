//! VibeTrip - vibe-first trip planning pipeline
//!
//! VibeTrip turns one trip request into a structured travel plan: it
//! gathers live price context from a web-search provider, folds the
//! snippets and the user's preferences into a single prompt, sends that
//! to a generative model, and parses the reply into a typed
//! [`TravelPlan`]. Rendering the plan is the embedding application's job;
//! this crate ends at the typed plan / terminal error boundary.
//!
//! # Core Properties
//!
//! - **Sequential by design**: one run is one linear pass - no parallel
//!   queries, no concurrent model calls, no cancellation mid-run
//! - **Partial-failure tolerant**: a failed search query degrades to an
//!   empty snippet, never an aborted run
//! - **Bounded retries**: the model is asked twice with the identical
//!   prompt, then the run fails with a single user-facing message
//! - **Fresh state per run**: nothing is cached or persisted across runs
//!
//! # Modules
//!
//! - [`config`] - Configuration types and the credentials guard
//! - [`trip`] - Trip request value objects
//! - [`search`] - Search provider client and snippet aggregation
//! - [`prompts`] - Prompt template rendering
//! - [`llm`] - Model client trait and Gemini implementation
//! - [`generate`] - Fence stripping, parsing, bounded retry
//! - [`pipeline`] - The planner tying the stages together
//! - [`links`] - Booking and hero-image URL helpers for the presentation layer

pub mod config;
pub mod generate;
pub mod links;
pub mod llm;
pub mod pipeline;
pub mod plan;
pub mod prompts;
pub mod search;
pub mod trip;

// Re-export commonly used types
pub use config::{LlmConfig, MODEL_KEY_ENV, PipelineConfig, SEARCH_KEY_ENV, SearchConfig};
pub use generate::{GenerateError, PlanGenerator, UNAVAILABLE_MESSAGE, strip_code_fences};
pub use links::{booking_search_url, hero_image_url};
pub use llm::{CompletionRequest, CompletionResponse, GeminiClient, LlmClient, LlmError, TokenUsage};
pub use pipeline::{PlanError, TripPlanner};
pub use plan::{CostBreakdown, ItineraryDay, StayOption, TransportOption, TravelPlan, VibeEvent};
pub use prompts::{PromptBuilder, PromptContext, PromptError};
pub use search::{
    QueryKind, SearchAggregator, SearchError, SearchHit, SearchProvider, SearchQuery,
    SearchSnippetSet, SerpApiClient, SnippetEntry, build_queries,
};
pub use trip::{TravelerGroup, TripError, TripRequest};
