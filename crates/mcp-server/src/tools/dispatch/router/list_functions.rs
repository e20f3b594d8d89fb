use super::super::{
    compute_list_functions_report, text_result, CallToolResult, ClangdMcpService,
    ListFunctionsRequest, McpError,
};

/// Functions of one file (ctags, then regex heuristic).
pub(in crate::tools::dispatch) async fn list_functions(
    service: &ClangdMcpService,
    request: ListFunctionsRequest,
) -> Result<CallToolResult, McpError> {
    log::debug!("list_functions {}", request.file_path);
    let report = compute_list_functions_report(service.config(), &request.file_path).await;
    Ok(text_result(report))
}
