//! SerpApi provider.
//!
//! Delegates the network calls to the `serpapi-search-rust` client:
//! - `SerpApiSearch::json` for the search endpoint
//! - `SerpApiSearch::location` for canonical location lookup
//!
//! The client takes the engine and the credential separately from a flat
//! `HashMap<String, String>` of parameters, so the ordered request map is
//! split before each call. SerpApi reports most failures inside a `200`
//! JSON body (`{"error": "..."}`); those are mapped to provider errors here.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use serpapi_search_rust::serp_api_search::SerpApiSearch;
use tracing::{debug, warn};

use super::{
    API_KEY_PARAM, DEFAULT_ENGINE, SearchError, SearchProvider, SearchRequest, SearchResult,
};
use crate::core::config::SerpApiConfig;

/// SerpApi client backed by `serpapi-search-rust`.
#[derive(Debug, Clone)]
pub struct SerpApiClient {
    timeout: Duration,
}

/// A request split into the pieces `SerpApiSearch` takes.
#[derive(Debug)]
struct Outbound {
    engine: String,
    api_key: String,
    params: HashMap<String, String>,
}

impl SerpApiClient {
    /// Create a client from the SerpApi section of the configuration.
    pub fn new(config: &SerpApiConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn with_timeout<F>(&self, call: F) -> SearchResult<Value>
    where
        F: Future<Output = Result<Value, String>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(message)) => Err(SearchError::Request(message)),
            Err(_) => Err(SearchError::Timeout(self.timeout.as_secs())),
        }
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    fn name(&self) -> &str {
        "serpapi"
    }

    async fn search(&self, request: &SearchRequest) -> SearchResult<Value> {
        let outbound = split_request(request)?;
        debug!(
            "SerpApi search on {} with {} extra parameter(s)",
            outbound.engine,
            outbound.params.len()
        );

        let search = SerpApiSearch::new(outbound.engine, outbound.params, outbound.api_key);
        let value = self
            .with_timeout(async { search.json().await.map_err(|e| e.to_string()) })
            .await?;

        check_search_payload(value)
    }

    async fn locations(&self, api_key: &str, query: &str, limit: i64) -> SearchResult<Vec<Value>> {
        let mut params = HashMap::new();
        params.insert("q".to_string(), query.to_string());
        params.insert("limit".to_string(), limit.to_string());

        let search = SerpApiSearch::new(DEFAULT_ENGINE.to_string(), params, api_key.to_string());
        let value = self
            .with_timeout(async { search.location().await.map_err(|e| e.to_string()) })
            .await?;

        decode_locations(value)
    }
}

/// Split the ordered request into engine, credential and remaining parameters.
fn split_request(request: &SearchRequest) -> SearchResult<Outbound> {
    let mut engine = DEFAULT_ENGINE.to_string();
    let mut api_key = None;
    let mut params = HashMap::new();

    for (key, value) in request.query_pairs() {
        match key.as_str() {
            "engine" => engine = value,
            API_KEY_PARAM => api_key = Some(value),
            _ => {
                params.insert(key, value);
            }
        }
    }

    Ok(Outbound {
        engine,
        api_key: api_key.ok_or(SearchError::MissingCredential)?,
        params,
    })
}

/// Turn an `error` body into a provider error.
///
/// SerpApi also sets `error` on successful searches that found nothing
/// ("Google hasn't returned any results for this query."); those keep
/// `search_metadata.status == "Success"` and stay successes.
fn check_search_payload(value: Value) -> SearchResult<Value> {
    let succeeded = value
        .pointer("/search_metadata/status")
        .and_then(Value::as_str)
        .is_some_and(|status| status == "Success");

    if let Some(message) = value.get("error").and_then(Value::as_str)
        && !succeeded
    {
        warn!("SerpApi search failed: {}", message);
        return Err(SearchError::provider(message));
    }
    Ok(value)
}

/// Decode the location lookup answer into its candidate list.
fn decode_locations(value: Value) -> SearchResult<Vec<Value>> {
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        warn!("SerpApi location lookup failed: {}", message);
        return Err(SearchError::provider(message));
    }
    Ok(serde_json::from_value(value)?)
}
