//! Tool Registry - central registration and dispatch for all tools.
//!
//! Dispatches HTTP tool calls by name. Tool metadata for listing comes
//! from the router built in `router.rs`.

use std::sync::Arc;

use tracing::warn;

use super::ToolError;
use super::definitions::{LocationsTool, SearchTool};
use crate::domains::search::SearchGateway;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    gateway: Arc<SearchGateway>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by the given gateway.
    pub fn new(gateway: Arc<SearchGateway>) -> Self {
        Self { gateway }
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            SearchTool::NAME => SearchTool::http_handler(arguments, self.gateway.clone()).await,
            LocationsTool::NAME => {
                LocationsTool::http_handler(arguments, self.gateway.clone()).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
