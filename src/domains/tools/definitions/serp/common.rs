//! Common utilities shared across SerpApi tools.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::domains::search::{DEFAULT_ENGINE, DEFAULT_LIMIT, DEFAULT_NUM};

/// Default engine for the `search` tool.
pub fn default_engine() -> String {
    DEFAULT_ENGINE.to_string()
}

/// Default `num` for the `search` tool. An explicit `null` deserializes to `None`.
pub fn default_num() -> Option<i64> {
    Some(DEFAULT_NUM)
}

/// Default limit for location lookups.
pub fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result carrying `data` as structured content.
///
/// The JSON is repeated as text content for clients that ignore
/// structured content.
pub fn structured_result<T: Serialize>(summary: String, data: &T) -> CallToolResult {
    match serde_json::to_value(data) {
        Ok(value) => {
            let mut result = CallToolResult::success(vec![
                Content::text(summary),
                Content::text(value.to_string()),
            ]);
            result.structured_content = Some(value);
            result
        }
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}
