use super::super::{CallToolResult, Content};

pub(in crate::tools::dispatch) fn tool_error(
    code: &'static str,
    message: impl Into<String>,
) -> CallToolResult {
    let message = message.into();
    log::debug!("tool error ({code}): {message}");
    CallToolResult::error(vec![Content::text(format!("error: {code}\n{message}"))])
}

pub(in crate::tools::dispatch) fn invalid_request(message: impl Into<String>) -> CallToolResult {
    tool_error("invalid_request", message)
}

pub(in crate::tools::dispatch) fn internal_error(message: impl Into<String>) -> CallToolResult {
    tool_error("internal", message)
}
