//! Trip request value objects
//!
//! A `TripRequest` captures one user submission. It is validated on
//! construction, immutable afterwards, and consumed by exactly one
//! pipeline run.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised when a trip request violates a construction invariant
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TripError {
    #[error("destination must not be empty")]
    EmptyDestination,

    #[error("duration must be at least 1 day, got {0}")]
    InvalidDuration(u32),

    #[error("budget must be positive, got {0}")]
    InvalidBudget(f64),
}

/// Who is traveling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelerGroup {
    Solo,
    Couple,
    Family,
    Friends,
}

impl TravelerGroup {
    /// Display name embedded into search queries and the prompt
    pub fn name(&self) -> &'static str {
        match self {
            Self::Solo => "Solo",
            Self::Couple => "Couple",
            Self::Family => "Family",
            Self::Friends => "Friends",
        }
    }
}

impl std::fmt::Display for TravelerGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One trip-planning submission
///
/// All text fields may be empty except `destination`. Prices in the
/// generated plan are denominated in `currency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Where the trip goes
    pub destination: String,

    /// Where the traveler starts from
    pub origin: String,

    /// Trip length in days
    pub duration: u32,

    /// Total budget in the selected currency
    pub budget: f64,

    /// Currency symbol for every price in the plan
    pub currency: String,

    /// Who is traveling
    pub group: TravelerGroup,

    /// Free-text mood the plan should match
    pub vibe: String,

    /// Free-text hard constraints
    pub constraints: String,

    /// Bias the lodging search toward offbeat results
    pub amaze_mode: bool,
}

impl TripRequest {
    /// Create a validated request
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        destination: impl Into<String>,
        origin: impl Into<String>,
        duration: u32,
        budget: f64,
        currency: impl Into<String>,
        group: TravelerGroup,
        vibe: impl Into<String>,
        constraints: impl Into<String>,
        amaze_mode: bool,
    ) -> Result<Self, TripError> {
        let request = Self {
            destination: destination.into(),
            origin: origin.into(),
            duration,
            budget,
            currency: currency.into(),
            group,
            vibe: vibe.into(),
            constraints: constraints.into(),
            amaze_mode,
        };
        debug!(destination = %request.destination, %duration, "TripRequest::new: called");
        request.validate()?;
        Ok(request)
    }

    /// Check the construction invariants
    ///
    /// Also run by the pipeline before any I/O, so a literal-constructed
    /// request cannot smuggle an invalid value past the boundary.
    pub fn validate(&self) -> Result<(), TripError> {
        if self.destination.trim().is_empty() {
            debug!("TripRequest::validate: empty destination");
            return Err(TripError::EmptyDestination);
        }
        if self.duration < 1 {
            debug!("TripRequest::validate: invalid duration");
            return Err(TripError::InvalidDuration(self.duration));
        }
        if self.budget <= 0.0 {
            debug!("TripRequest::validate: invalid budget");
            return Err(TripError::InvalidBudget(self.budget));
        }
        Ok(())
    }
}
