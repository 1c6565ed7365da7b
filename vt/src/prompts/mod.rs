//! Prompt construction
//!
//! Renders the embedded Handlebars template from the trip parameters and
//! the aggregated search snippets. Rendering is pure and does no I/O:
//! identical inputs produce byte-identical prompt text.

use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub mod embedded;

use crate::search::SearchSnippetSet;
use crate::trip::TripRequest;

/// Errors raised while building a prompt
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt template not found: {0}")]
    UnknownTemplate(String),

    #[error("failed to render template: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Context for rendering the plan prompt
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    pub destination: String,
    pub origin: String,
    pub duration: u32,
    /// Pre-formatted so whole amounts render without a trailing fraction
    pub budget: String,
    pub currency: String,
    pub group: String,
    pub vibe: String,
    pub constraints: String,
    /// The snippet set rendered into its search-context block
    pub search_context: String,
}

impl PromptContext {
    /// Build the context for one run
    pub fn from_run(trip: &TripRequest, snippets: &SearchSnippetSet) -> Self {
        debug!(destination = %trip.destination, "PromptContext::from_run: called");
        Self {
            destination: trip.destination.clone(),
            origin: trip.origin.clone(),
            duration: trip.duration,
            budget: format_budget(trip.budget),
            currency: trip.currency.clone(),
            group: trip.group.to_string(),
            vibe: trip.vibe.clone(),
            constraints: trip.constraints.clone(),
            search_context: snippets.to_context_block(),
        }
    }
}

/// Format the budget without a trailing fraction for whole amounts
fn format_budget(budget: f64) -> String {
    if budget.fract() == 0.0 {
        format!("{:.0}", budget)
    } else {
        format!("{}", budget)
    }
}

/// Renders prompt templates
pub struct PromptBuilder {
    hbs: Handlebars<'static>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        debug!("PromptBuilder::new: called");
        Self {
            hbs: Handlebars::new(),
        }
    }

    /// Render the plan prompt for one run
    pub fn build(&self, trip: &TripRequest, snippets: &SearchSnippetSet) -> Result<String, PromptError> {
        debug!(destination = %trip.destination, "PromptBuilder::build: called");
        let context = PromptContext::from_run(trip, snippets);
        self.render("plan", &context)
    }

    /// Render a template with the given context
    fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String, PromptError> {
        let template = embedded::get_embedded(template_name)
            .ok_or_else(|| PromptError::UnknownTemplate(template_name.to_string()))?;

        self.hbs
            .render_template(template, context)
            .map_err(PromptError::from)
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
