//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the search gateway.
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and wired into a `ToolRouter` by `domains/tools/router.rs`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::search::{SearchGateway, SearchProvider, SerpApiClient};
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "SerpApi search server. Use 'search' to query any SerpApi engine \
     (google, bing, youtube, ebay, walmart, ...) and 'locations' to find canonical location \
     strings for the search 'location' argument.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the search gateway.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Gateway shared by every tool.
    gateway: Arc<SearchGateway>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to SerpApi.
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(SerpApiClient::new(&config.serpapi));
        Self::with_provider(config, provider)
    }

    /// Create a new MCP server with a custom search provider.
    pub fn with_provider(config: Config, provider: Arc<dyn SearchProvider>) -> Self {
        let gateway = Arc::new(SearchGateway::new(config.credentials.clone(), provider));
        info!("Search provider: {}", gateway.provider_name());

        Self {
            tool_router: build_tool_router::<Self>(gateway.clone()),
            config: Arc::new(config),
            gateway,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server instructions sent to clients.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "outputSchema": t.output_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let registry = ToolRegistry::new(self.gateway.clone());
        registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
