//! The outbound seam between the gateway and the search provider.

use async_trait::async_trait;
use serde_json::Value;

use super::{SearchRequest, SearchResult};

/// A search-engine-results provider.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Get the name of this provider.
    fn name(&self) -> &str;

    /// Execute a search and return the full structured result.
    async fn search(&self, request: &SearchRequest) -> SearchResult<Value>;

    /// Resolve free-text location into canonical location candidates.
    async fn locations(&self, api_key: &str, query: &str, limit: i64) -> SearchResult<Vec<Value>>;
}
