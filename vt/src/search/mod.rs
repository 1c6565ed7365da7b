//! Search aggregation
//!
//! Issues the three fixed queries against a search provider and condenses
//! the results into short text snippets for the prompt. Partial failure is
//! tolerated by design: a failed query contributes an empty summary and
//! the aggregator never raises.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

mod error;
pub mod queries;
mod serpapi;

pub use error::SearchError;
pub use queries::{QueryKind, SearchQuery, build_queries};
pub use serpapi::SerpApiClient;

use crate::trip::TripRequest;

/// Price text used when a result carries no price field
const PRICE_FALLBACK: &str = "Check Site";

/// Separator between condensed results within one summary
const SNIPPET_SEPARATOR: &str = " | ";

/// One search result condensed to what the prompt needs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHit {
    /// Short extracted text fragment
    pub snippet: Option<String>,

    /// Best-effort price fragment
    pub price: Option<String>,
}

/// A web search backend
///
/// One outbound call per query. Implementations report their own errors;
/// the aggregator decides what failure means.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one query and return its organic results
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

/// One query's condensed summary
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetEntry {
    /// The query text that produced this summary
    pub query: String,

    /// Joined snippets, empty when the query failed or found nothing
    pub summary: String,
}

/// Summaries for the three fixed queries, in query order
///
/// Built fresh per run and never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSnippetSet {
    entries: Vec<SnippetEntry>,
}

impl SearchSnippetSet {
    /// Append one query's summary
    pub fn push(&mut self, query: impl Into<String>, summary: impl Into<String>) {
        self.entries.push(SnippetEntry {
            query: query.into(),
            summary: summary.into(),
        });
    }

    /// Entries in query order
    pub fn entries(&self) -> &[SnippetEntry] {
        &self.entries
    }

    /// True when every summary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.summary.is_empty())
    }

    /// Render the set into the prompt's search-context block
    pub fn to_context_block(&self) -> String {
        debug!(entry_count = %self.entries.len(), "SearchSnippetSet::to_context_block: called");
        let mut out = String::new();
        for entry in &self.entries {
            out.push('\n');
            out.push_str(&format!("Search '{}': {}", entry.query, entry.summary));
        }
        out
    }
}

/// Issues the three fixed queries and condenses the results
pub struct SearchAggregator {
    provider: Arc<dyn SearchProvider>,
}

impl SearchAggregator {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        debug!("SearchAggregator::new: called");
        Self { provider }
    }

    /// Gather live context for one request
    ///
    /// Queries run one at a time in the fixed order. A provider error is
    /// logged and that query contributes an empty summary; no retries at
    /// this layer, since the downstream model can work on sparse context.
    pub async fn aggregate(&self, trip: &TripRequest) -> SearchSnippetSet {
        debug!(destination = %trip.destination, "SearchAggregator::aggregate: called");
        let mut set = SearchSnippetSet::default();

        for query in build_queries(trip) {
            let summary = match self.provider.search(&query.text).await {
                Ok(hits) => {
                    debug!(kind = %query.kind.name(), hit_count = %hits.len(), "aggregate: query succeeded");
                    condense(&hits)
                }
                Err(e) => {
                    warn!(kind = %query.kind.name(), error = %e, "aggregate: query failed, degrading to empty summary");
                    String::new()
                }
            };
            set.push(query.text, summary);
        }

        set
    }
}

/// Join hits into the prompt's snippet format
fn condense(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|h| {
            format!(
                "{} (Price: {})",
                h.snippet.as_deref().unwrap_or_default(),
                h.price.as_deref().unwrap_or(PRICE_FALLBACK)
            )
        })
        .collect::<Vec<_>>()
        .join(SNIPPET_SEPARATOR)
}


#[cfg(test)]
mod tests {
    use super::mock::MockSearchProvider;
    use super::*;
    use crate::trip::TravelerGroup;

    fn request() -> TripRequest {
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

    fn hit(snippet: &str, price: Option<&str>) -> SearchHit {
        SearchHit {
            snippet: Some(snippet.to_string()),
            price: price.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_failing_provider_degrades_to_empty_summaries() {
        let provider = Arc::new(MockSearchProvider::failing());
        let aggregator = SearchAggregator::new(provider.clone());

        let set = aggregator.aggregate(&request()).await;

        assert_eq!(set.entries().len(), 3);
        assert!(set.entries().iter().all(|e| e.summary.is_empty()));
        assert!(set.is_empty());
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_queries_issued_sequentially_in_order() {
        let provider = Arc::new(MockSearchProvider::new(vec![
            vec![hit("Beach resort", Some("5000"))],
            vec![],
            vec![hit("Spice market walk", None)],
        ]));
        let aggregator = SearchAggregator::new(provider.clone());

        let set = aggregator.aggregate(&request()).await;

        assert_eq!(provider.call_count(), 3);
        let entries = set.entries();
        assert!(entries[0].query.contains("hotels in Goa"));
        assert_eq!(entries[0].summary, "Beach resort (Price: 5000)");
        assert!(entries[1].query.contains("from Mumbai to Goa"));
        assert_eq!(entries[1].summary, "");
        assert!(entries[2].query.contains("must do experiences"));
        assert_eq!(entries[2].summary, "Spice market walk (Price: Check Site)");
        assert!(!set.is_empty());
    }

    #[test]
    fn test_condense_joins_with_separator() {
        let joined = condense(&[hit("A", Some("10")), hit("B", None)]);
        assert_eq!(joined, "A (Price: 10) | B (Price: Check Site)");
    }

    #[test]
    fn test_condense_missing_snippet() {
        let joined = condense(&[SearchHit {
            snippet: None,
            price: Some("99".to_string()),
        }]);
        assert_eq!(joined, " (Price: 99)");
    }

    #[test]
    fn test_context_block_format() {
        let mut set = SearchSnippetSet::default();
        set.push("hotels in Goa", "Beach resort (Price: 5000)");
        set.push("flights to Goa", "");

        let block = set.to_context_block();
        assert_eq!(
            block,
            "\nSearch 'hotels in Goa': Beach resort (Price: 5000)\nSearch 'flights to Goa': "
        );
    }
}
