//! Search provider error types

use thiserror::Error;

/// Errors from one search-provider call
///
/// The aggregator absorbs all of these: a failing query degrades to an
/// empty summary and the failure is logged, never surfaced.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search API key is not configured")]
    MissingKey,

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
