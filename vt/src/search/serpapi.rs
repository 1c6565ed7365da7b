//! SerpApi search client
//!
//! Implements the SearchProvider trait against the SerpApi JSON endpoint:
//! one outbound GET per query with a bounded result count and an explicit
//! timeout from configuration.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{SearchError, SearchHit, SearchProvider};
use crate::config::SearchConfig;

/// SerpApi client
pub struct SerpApiClient {
    engine: String,
    api_key: String,
    base_url: String,
    result_limit: u32,
    http: Client,
}

impl SerpApiClient {
    /// Create a new client from configuration
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        debug!(engine = %config.engine, result_limit = %config.result_limit, "SerpApiClient::from_config: called");
        let timeout = Duration::from_millis(config.timeout_ms);

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SearchError::Network)?;

        Ok(Self {
            engine: config.engine.clone(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            result_limit: config.result_limit,
            http,
        })
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        debug!(%query, "SerpApiClient::search: called");
        if self.api_key.trim().is_empty() {
            debug!("search: no API key configured");
            return Err(SearchError::MissingKey);
        }

        let url = format!("{}/search.json", self.base_url);
        let num = self.result_limit.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("engine", self.engine.as_str()),
                ("q", query),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(%status, "search: API error");
            return Err(SearchError::Api { status, message });
        }

        debug!("search: success");
        let api_response: SerpApiResponse = response.json().await?;

        Ok(api_response
            .organic_results
            .into_iter()
            .map(|r| SearchHit {
                snippet: r.snippet,
                price: r.price,
            })
            .collect())
    }
}

// SerpApi response types

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    price: Option<String>,
}
