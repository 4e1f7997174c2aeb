//! Search gateway: request assembly and response shaping.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::{
    API_KEY_PARAM, LocationsEnvelope, SearchEnvelope, SearchError, SearchProvider, SearchQuery,
    SearchRequest, SearchResult,
};
use crate::core::config::CredentialsConfig;

/// Validates the credential, builds provider requests and wraps the
/// provider's answers into envelopes.
///
/// The gateway holds no per-call state; it can be shared across threads
/// behind an `Arc`.
#[derive(Clone)]
pub struct SearchGateway {
    credentials: CredentialsConfig,
    provider: Arc<dyn SearchProvider>,
}

impl SearchGateway {
    /// Create a gateway using the given credentials and provider.
    pub fn new(credentials: CredentialsConfig, provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            credentials,
            provider,
        }
    }

    /// Get the provider name.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    fn api_key(&self) -> SearchResult<&str> {
        self.credentials
            .serpapi_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(SearchError::MissingCredential)
    }

    /// Assemble the provider request for a query.
    ///
    /// Order: credential, `q`, `engine`, `location`, `num`, then extras.
    /// Extras override earlier entries, except the credential which is
    /// reserved.
    pub fn build_request(&self, query: &SearchQuery) -> SearchResult<SearchRequest> {
        let api_key = self.api_key()?;

        if query.extra.contains_key(API_KEY_PARAM) {
            return Err(SearchError::ReservedParameter(API_KEY_PARAM.to_string()));
        }

        let mut request = SearchRequest::new();
        request.insert(API_KEY_PARAM, api_key);
        request.insert("q", query.query.as_str());
        request.insert("engine", query.engine.as_str());
        if let Some(location) = &query.location {
            request.insert("location", location.as_str());
        }
        if let Some(num) = query.num {
            request.insert("num", num);
        }
        for (key, value) in &query.extra {
            request.insert(key.clone(), value.clone());
        }

        Ok(request)
    }

    /// Run a search through the provider.
    #[instrument(skip(self, query), fields(engine = %query.engine))]
    pub async fn search(&self, query: SearchQuery) -> SearchResult<SearchEnvelope> {
        let request = self.build_request(&query)?;
        info!("Searching '{}' on {}", query.query, query.engine);
        debug!("Request has {} parameter(s)", request.as_map().len());

        let results = self.provider.search(&request).await?;

        Ok(SearchEnvelope {
            engine: query.engine,
            query: query.query,
            location: query.location,
            params: request.redacted(),
            results,
        })
    }

    /// Look up canonical location candidates.
    #[instrument(skip(self))]
    pub async fn locations(&self, q: &str, limit: i64) -> SearchResult<LocationsEnvelope> {
        let api_key = self.api_key()?;
        info!("Looking up locations for '{}' (limit {})", q, limit);

        let locations = self.provider.locations(api_key, q, limit).await?;
        debug!("Provider returned {} location(s)", locations.len());

        Ok(LocationsEnvelope {
            query: q.to_string(),
            locations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::search::testing::RecordingProvider;
    use serde_json::{Value, json};

    fn credentials(key: Option<&str>) -> CredentialsConfig {
        CredentialsConfig {
            serpapi_api_key: key.map(str::to_string),
        }
    }

    fn gateway(key: Option<&str>) -> (SearchGateway, Arc<RecordingProvider>) {
        let provider = Arc::new(RecordingProvider::default());
        (
            SearchGateway::new(credentials(key), provider.clone()),
            provider,
        )
    }

    #[tokio::test]
    async fn test_search_builds_default_request() {
        let (gateway, provider) = gateway(Some("abc123"));

        let envelope = gateway
            .search(SearchQuery::new("laptops").engine("walmart"))
            .await
            .unwrap();

        let request = provider.last_search();
        assert_eq!(
            Value::Object(request.as_map().clone()),
            json!({"api_key": "abc123", "q": "laptops", "engine": "walmart", "num": 10})
        );
        assert_eq!(envelope.engine, "walmart");
        assert_eq!(envelope.query, "laptops");
        assert_eq!(envelope.location, None);
        assert_eq!(envelope.results["search_metadata"]["status"], json!("Success"));
    }

    #[tokio::test]
    async fn test_missing_credential_skips_provider() {
        let (gateway, provider) = gateway(None);

        let err = gateway.search(SearchQuery::new("x")).await.unwrap_err();
        assert!(matches!(err, SearchError::MissingCredential));
        assert!(err.is_configuration());
        assert_eq!(provider.search_count(), 0);

        let err = gateway.locations("Austin", 3).await.unwrap_err();
        assert!(matches!(err, SearchError::MissingCredential));
        assert_eq!(provider.lookup_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_credential_counts_as_missing() {
        let (gateway, provider) = gateway(Some(""));
        let err = gateway.search(SearchQuery::new("x")).await.unwrap_err();
        assert!(matches!(err, SearchError::MissingCredential));
        assert_eq!(provider.search_count(), 0);
    }

    #[tokio::test]
    async fn test_explicit_null_num_is_omitted() {
        let (gateway, provider) = gateway(Some("k"));

        gateway
            .search(SearchQuery::new("shoes").num(None).extra_param("hl", "en"))
            .await
            .unwrap();

        let request = provider.last_search();
        assert!(!request.contains_key("num"));
        assert!(!request.contains_key("location"));
        assert_eq!(request.get("hl"), Some(&json!("en")));
    }

    #[tokio::test]
    async fn test_out_of_range_values_pass_through() {
        let (gateway, provider) = gateway(Some("k"));

        gateway
            .search(SearchQuery::new("shoes").num(Some(-1)).location(""))
            .await
            .unwrap();
        gateway.locations("Austin", 0).await.unwrap();

        let request = provider.last_search();
        assert_eq!(request.get("num"), Some(&json!(-1)));
        assert_eq!(request.get("location"), Some(&json!("")));
        assert_eq!(provider.lookups.lock().unwrap()[0].2, 0);
    }

    #[tokio::test]
    async fn test_location_included_when_present() {
        let (gateway, provider) = gateway(Some("k"));

        let envelope = gateway
            .search(SearchQuery::new("pizza").location("Austin, Texas"))
            .await
            .unwrap();

        assert_eq!(
            provider.last_search().get("location"),
            Some(&json!("Austin, Texas"))
        );
        assert_eq!(envelope.location.as_deref(), Some("Austin, Texas"));
    }

    #[tokio::test]
    async fn test_extra_params_override_defaults() {
        let (gateway, provider) = gateway(Some("k"));

        gateway
            .search(
                SearchQuery::new("shoes")
                    .extra_param("num", 50)
                    .extra_param("engine", "bing")
                    .extra_param("gl", "us"),
            )
            .await
            .unwrap();

        let request = provider.last_search();
        assert_eq!(request.get("num"), Some(&json!(50)));
        assert_eq!(request.get("engine"), Some(&json!("bing")));
        assert_eq!(request.get("gl"), Some(&json!("us")));
        assert_eq!(request.as_map().len(), 5);
    }

    #[tokio::test]
    async fn test_credential_cannot_be_overridden() {
        let (gateway, provider) = gateway(Some("k"));

        let err = gateway
            .search(SearchQuery::new("x").extra_param("api_key", "stolen"))
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::ReservedParameter(ref key) if key == "api_key"));
        assert_eq!(provider.search_count(), 0);
    }

    #[tokio::test]
    async fn test_envelope_params_redact_credential() {
        let (gateway, _provider) = gateway(Some("abc123"));

        let envelope = gateway.search(SearchQuery::new("laptops")).await.unwrap();

        assert_eq!(envelope.params["api_key"], json!("[REDACTED]"));
        assert_eq!(envelope.params["q"], json!("laptops"));
        assert_eq!(envelope.params["num"], json!(10));
        assert!(!serde_json::to_string(&envelope).unwrap().contains("abc123"));
    }

    #[tokio::test]
    async fn test_search_is_deterministic() {
        let (gateway, _provider) = gateway(Some("k"));
        let query = SearchQuery::new("laptops").extra_param("hl", "en");

        let first = serde_json::to_vec(&gateway.search(query.clone()).await.unwrap()).unwrap();
        let second = serde_json::to_vec(&gateway.search(query).await.unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let provider = Arc::new(RecordingProvider::failing("Invalid API key."));
        let gateway = SearchGateway::new(credentials(Some("k")), provider.clone());

        let err = gateway.search(SearchQuery::new("x")).await.unwrap_err();
        assert!(matches!(err, SearchError::Provider(_)));
        assert!(!err.is_configuration());
        assert_eq!(provider.search_count(), 1);
    }

    #[tokio::test]
    async fn test_locations_delegates_and_wraps() {
        let (gateway, provider) = gateway(Some("k"));

        let envelope = gateway.locations("Indianapolis", 5).await.unwrap();

        assert_eq!(
            provider.lookups.lock().unwrap().as_slice(),
            &[("k".to_string(), "Indianapolis".to_string(), 5)]
        );
        assert_eq!(envelope.query, "Indianapolis");
        assert_eq!(envelope.locations.len(), 1);
        assert_eq!(envelope.locations[0]["name"], json!("Indianapolis"));
    }
}
