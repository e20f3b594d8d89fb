use super::super::{
    compute_includes_report, text_result, CallToolResult, ClangdMcpService, GetIncludesRequest,
    McpError,
};

/// `#include` directives of one file.
pub(in crate::tools::dispatch) async fn get_includes(
    _service: &ClangdMcpService,
    request: GetIncludesRequest,
) -> Result<CallToolResult, McpError> {
    log::debug!("get_includes {}", request.file_path);
    Ok(text_result(compute_includes_report(&request.file_path)))
}
