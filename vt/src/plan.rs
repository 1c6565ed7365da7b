//! Parsed travel plan value objects
//!
//! These mirror the JSON schema the prompt instructs the model to emit.
//! Every field defaults when absent: a syntactically valid response with
//! missing fields still parses, and the presentation boundary applies its
//! own presence checks before rendering.

use serde::{Deserialize, Serialize};

/// A complete generated travel plan
///
/// Produced once per pipeline run and never persisted. On generation
/// failure the caller receives a terminal error instead; a partial plan is
/// never exposed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelPlan {
    /// Advisory shown when the budget looks tight for the trip
    pub budget_tip: Option<String>,

    /// Short catchy hook for the hero banner
    pub hero_hook: String,

    /// Two-sentence overview
    pub summary: String,

    /// Experiences matched to the requested vibe
    pub vibe_events: Vec<VibeEvent>,

    /// Ways of getting there; the prompt asks for exactly two
    pub transport: Vec<TransportOption>,

    /// Lodging options
    pub stay: Vec<StayOption>,

    /// Day-by-day schedule
    pub itinerary: Vec<ItineraryDay>,

    /// Estimated spend per category
    pub costs: CostBreakdown,
}

/// One experience matched to the requested vibe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VibeEvent {
    pub title: String,

    /// Why this event fits the vibe
    pub description: String,
}

/// One way of getting to the destination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportOption {
    /// Mode of travel, e.g. "Flight" or "Train"
    #[serde(rename = "type")]
    pub kind: String,

    /// Provider name
    pub name: String,

    /// Display-ready price in the requested currency
    pub price: String,

    /// Duration or other booking info
    pub details: String,
}

/// One lodging option
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StayOption {
    pub name: String,

    /// Display-ready price in the requested currency
    pub price: String,

    /// Star rating as the model printed it, e.g. "4.5"
    pub rating: String,

    /// Comma-separated amenities
    pub features: String,
}

/// One day of the itinerary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,

    /// Short title for the day
    pub theme: String,

    pub morning: String,
    pub afternoon: String,
    pub evening: String,
}

/// Estimated spend per category, as display-ready text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostBreakdown {
    pub transport: String,
    pub stay: String,
    pub food: String,
    pub shopping_misc: String,
    pub total: String,
}
