//! SerpApi location lookup tool.
//!
//! Resolves free text such as "Indianapolis" into canonical Google
//! location strings that can be fed to the `location` search parameter.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use super::common::{default_limit, error_result, structured_result};
use crate::domains::search::{LocationsEnvelope, SearchGateway};
use crate::domains::tools::ToolError;

/// Parameters for location lookups.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LocationsParams {
    /// Place name fragment to resolve.
    #[schemars(description = "Place name to look up, e.g. 'Indianapolis'")]
    pub q: String,

    /// Maximum number of candidates to return (default: 10).
    #[schemars(description = "Maximum number of locations (default: 10)")]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// SerpApi Locations Tool implementation.
#[derive(Debug, Clone)]
pub struct LocationsTool;

impl LocationsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "locations";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Look up canonical Google location strings (e.g., 'Indianapolis, Indiana') for use as the 'location' argument of the search tool.";

    /// Execute the tool logic.
    pub async fn execute(gateway: &SearchGateway, params: LocationsParams) -> CallToolResult {
        match gateway.locations(&params.q, params.limit).await {
            Ok(envelope) => {
                info!("Found {} location(s) for '{}'", envelope.locations.len(), envelope.query);
                let summary = format!(
                    "Found {} location(s) matching '{}'",
                    envelope.locations.len(),
                    envelope.query
                );
                structured_result(summary, &envelope)
            }
            Err(e) if e.is_configuration() => error_result(&e.to_string()),
            Err(e) => {
                error!("Location lookup failed: {}", e);
                error_result(&format!("Location lookup failed: {}", e))
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: Value,
        gateway: Arc<SearchGateway>,
    ) -> Result<Value, ToolError> {
        let params: LocationsParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&gateway, params).await;

        serde_json::to_value(result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<LocationsParams>(),
            annotations: None,
            output_schema: Some(schema_for_type::<LocationsEnvelope>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(gateway: Arc<SearchGateway>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let gateway = gateway.clone();
            async move {
                let params: LocationsParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&gateway, params).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialsConfig;
    use crate::domains::search::testing::RecordingProvider;
    use serde_json::json;

    fn gateway(key: Option<&str>) -> (Arc<SearchGateway>, Arc<RecordingProvider>) {
        let provider = Arc::new(RecordingProvider::default());
        let credentials = CredentialsConfig {
            serpapi_api_key: key.map(str::to_string),
        };
        (
            Arc::new(SearchGateway::new(credentials, provider.clone())),
            provider,
        )
    }

    #[test]
    fn test_locations_params_default_limit() {
        let params: LocationsParams = serde_json::from_str(r#"{"q": "Austin"}"#).unwrap();
        assert_eq!(params.limit, 10);
    }

    #[tokio::test]
    async fn test_execute_indianapolis_scenario() {
        let (gateway, provider) = gateway(Some("k"));

        let result = LocationsTool::execute(
            &gateway,
            LocationsParams {
                q: "Indianapolis".to_string(),
                limit: 5,
            },
        )
        .await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            provider.lookups.lock().unwrap().as_slice(),
            &[("k".to_string(), "Indianapolis".to_string(), 5)]
        );
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["query"], json!("Indianapolis"));
        assert_eq!(
            structured["locations"][0]["canonical_name"],
            json!("Indianapolis,Indiana,United States")
        );
    }

    #[tokio::test]
    async fn test_execute_without_credential() {
        let (gateway, provider) = gateway(None);

        let result = LocationsTool::execute(
            &gateway,
            LocationsParams {
                q: "Austin".to_string(),
                limit: 3,
            },
        )
        .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(provider.lookup_count(), 0);
    }

    #[tokio::test]
    async fn test_http_handler_uses_default_limit() {
        let (gateway, provider) = gateway(Some("k"));

        let value = LocationsTool::http_handler(json!({"q": "Boston"}), gateway)
            .await
            .unwrap();

        assert_eq!(value["isError"], json!(false));
        assert_eq!(provider.lookups.lock().unwrap()[0].2, 10);
    }

    #[tokio::test]
    async fn test_http_handler_forwards_negative_limit() {
        let (gateway, provider) = gateway(Some("k"));

        let value = LocationsTool::http_handler(json!({"q": "Boston", "limit": -3}), gateway)
            .await
            .unwrap();

        assert_eq!(value["isError"], json!(false));
        assert_eq!(provider.lookups.lock().unwrap()[0].2, -3);
    }

    #[tokio::test]
    async fn test_http_handler_invalid_arguments() {
        let (gateway, _provider) = gateway(Some("k"));

        let err = LocationsTool::http_handler(json!({"limit": 2}), gateway)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_tool_metadata() {
        let tool = LocationsTool::to_tool();
        assert_eq!(tool.name, "locations");
        let output = tool.output_schema.unwrap();
        let properties = output["properties"].as_object().unwrap();
        assert!(properties.contains_key("query"));
        assert!(properties.contains_key("locations"));
    }
}
