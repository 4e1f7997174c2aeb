//! Tool Router - builds the rmcp ToolRouter from tool definitions.
//!
//! Each tool knows how to create its own route; this module wires them
//! to the shared search gateway.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{LocationsTool, SearchTool};
use crate::domains::search::SearchGateway;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(gateway: Arc<SearchGateway>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchTool::create_route(gateway.clone()))
        .with_route(LocationsTool::create_route(gateway))
}
