//! SerpApi search tool.
//!
//! Runs a search on any SerpApi engine (google, bing, youtube, ebay,
//! walmart, ...) and returns the provider's full result wrapped in an
//! envelope that echoes the request.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{error, info};

use super::common::{default_engine, default_num, error_result, structured_result};
use crate::domains::search::{SearchEnvelope, SearchGateway, SearchQuery};
use crate::domains::tools::ToolError;

/// Parameters for the search tool.
///
/// Any argument not listed here is forwarded to SerpApi unchanged.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// The search query text.
    #[schemars(description = "Search query text")]
    pub query: String,

    /// SerpApi engine identifier (default: google).
    #[schemars(
        description = "SerpApi engine: google, bing, youtube, ebay, walmart, ... (default: google)"
    )]
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Free-text location to search from.
    #[schemars(description = "Location to search from, e.g. 'Austin, Texas, United States'")]
    #[serde(default)]
    pub location: Option<String>,

    /// Result count hint. Omitted means 10, explicit null means "do not send".
    #[schemars(description = "Number of results (default: 10; pass null to leave it out)")]
    #[serde(default = "default_num")]
    pub num: Option<i64>,

    /// Extra engine-specific parameters (hl, gl, tbm, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<SearchParams> for SearchQuery {
    fn from(params: SearchParams) -> Self {
        Self {
            query: params.query,
            engine: params.engine,
            location: params.location,
            num: params.num,
            extra: params.extra,
        }
    }
}

/// SerpApi Search Tool implementation.
#[derive(Debug, Clone)]
pub struct SearchTool;

impl SearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Run a SerpApi search across engines (google, bing, youtube, ebay, walmart, ...). Extra arguments are passed to SerpApi as-is. Returns the engine, query, location, the parameters sent, and the raw SerpApi result under 'results'.";

    /// Execute the tool logic.
    pub async fn execute(gateway: &SearchGateway, params: SearchParams) -> CallToolResult {
        info!("search tool called: engine={}", params.engine);

        match gateway.search(params.into()).await {
            Ok(envelope) => {
                let summary = format!(
                    "SerpApi {} results for '{}'",
                    envelope.engine, envelope.query
                );
                structured_result(summary, &envelope)
            }
            Err(e) if e.is_configuration() => error_result(&e.to_string()),
            Err(e) => {
                error!("Search failed: {}", e);
                error_result(&format!("Search failed: {}", e))
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: Value,
        gateway: Arc<SearchGateway>,
    ) -> Result<Value, ToolError> {
        let params: SearchParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&gateway, params).await;

        serde_json::to_value(result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchParams>(),
            annotations: None,
            output_schema: Some(schema_for_type::<SearchEnvelope>().into()),
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
                let params: SearchParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&gateway, params).await)
            }
            .boxed()
        })
    }
}
