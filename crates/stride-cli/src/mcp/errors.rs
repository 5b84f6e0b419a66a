//! Error handling utilities for MCP server

use rmcp::ErrorData;
use stride_core::PlannerError;

/// Helper to convert planner errors to MCP errors.
///
/// Rejected requests become `invalid_params` so the client can correct them;
/// everything else is an `internal_error`.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let message = format!("{message}: {error}");
    if error.is_rejection() {
        ErrorData::invalid_params(message, None)
    } else {
        ErrorData::internal_error(message, None)
    }
}
