//! Fixed query templates
//!
//! Every run issues exactly these three queries, in this order. Amaze-mode
//! changes only the lodging modifier.

use tracing::debug;

use crate::trip::TripRequest;

/// Lodging modifier when amaze-mode is on
const OFFBEAT_MODIFIER: &str = "hidden gems offbeat";

/// Lodging modifier for the default mode
const POPULAR_MODIFIER: &str = "top rated popular";

/// Which of the three fixed queries a search belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Lodging,
    Transport,
    Activities,
}

impl QueryKind {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lodging => "lodging",
            Self::Transport => "transport",
            Self::Activities => "activities",
        }
    }
}

/// One templated query ready to send to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub kind: QueryKind,
    pub text: String,
}

/// Build the three fixed queries for a request
pub fn build_queries(trip: &TripRequest) -> [SearchQuery; 3] {
    debug!(destination = %trip.destination, amaze_mode = %trip.amaze_mode, "build_queries: called");
    let modifier = if trip.amaze_mode {
        OFFBEAT_MODIFIER
    } else {
        POPULAR_MODIFIER
    };

    [
        SearchQuery {
            kind: QueryKind::Lodging,
            text: format!(
                "{} hotels in {} for {} price",
                modifier, trip.destination, trip.group
            ),
        },
        SearchQuery {
            kind: QueryKind::Transport,
            text: format!(
                "flights trains buses from {} to {} price",
                trip.origin, trip.destination
            ),
        },
        SearchQuery {
            kind: QueryKind::Activities,
            text: format!("must do experiences in {} {}", trip.destination, trip.vibe),
        },
    ]
}
