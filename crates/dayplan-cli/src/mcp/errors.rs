//! Error handling utilities for MCP server

use dayplan_core::{ErrorKind, PlannerError};
use rmcp::ErrorData;
use serde_json::json;

/// Convert a planner error to an MCP error.
///
/// The engine's error kind picks the JSON-RPC error code; the stable planner
/// code and kind travel in `data` so clients can branch on them.
pub fn to_mcp_error(error: &PlannerError) -> ErrorData {
    let message = error.to_string();
    let data = Some(json!({
        "code": error.code(),
        "kind": error.kind().as_str(),
    }));

    match error.kind() {
        ErrorKind::NotFound => ErrorData::resource_not_found(message, data),
        ErrorKind::Disabled | ErrorKind::Validation => ErrorData::invalid_params(message, data),
        ErrorKind::Conflict => ErrorData::invalid_request(message, data),
    }
}
