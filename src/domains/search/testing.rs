//! Test doubles for the search provider seam.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{SearchError, SearchProvider, SearchRequest, SearchResult};

/// Provider stub that records every call and answers with fixed payloads.
#[derive(Default)]
pub(crate) struct RecordingProvider {
    pub searches: Mutex<Vec<SearchRequest>>,
    pub lookups: Mutex<Vec<(String, String, i64)>>,
    pub fail_with: Option<&'static str>,
}

impl RecordingProvider {
    pub fn failing(message: &'static str) -> Self {
        Self {
            fail_with: Some(message),
            ..Default::default()
        }
    }

    pub fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }

    pub fn last_search(&self) -> SearchRequest {
        self.searches.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl SearchProvider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    async fn search(&self, request: &SearchRequest) -> SearchResult<Value> {
        self.searches.lock().unwrap().push(request.clone());
        if let Some(message) = self.fail_with {
            return Err(SearchError::provider(message));
        }
        Ok(json!({
            "search_metadata": { "status": "Success" },
            "organic_results": [{ "position": 1, "title": "First" }]
        }))
    }

    async fn locations(&self, api_key: &str, query: &str, limit: i64) -> SearchResult<Vec<Value>> {
        self.lookups
            .lock()
            .unwrap()
            .push((api_key.to_string(), query.to_string(), limit));
        if let Some(message) = self.fail_with {
            return Err(SearchError::provider(message));
        }
        Ok(vec![json!({
            "name": query,
            "canonical_name": format!("{query},Indiana,United States"),
        })])
    }
}
