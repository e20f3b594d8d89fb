use super::super::{
    arg_or, compute_check_file_report, text_result, CallToolResult, CheckFileRequest,
    ClangdMcpService, McpError,
};

const DEFAULT_BUILD_DIR: &str = "build";

/// Diagnostics for one file (clangd, then compiler fallback).
pub(in crate::tools::dispatch) async fn check_file(
    service: &ClangdMcpService,
    request: CheckFileRequest,
) -> Result<CallToolResult, McpError> {
    let build_dir = arg_or(request.build_dir.as_deref(), DEFAULT_BUILD_DIR);
    log::debug!("check_file {} (build_dir={build_dir})", request.file_path);

    let report = compute_check_file_report(service.config(), &request.file_path, build_dir).await;
    Ok(text_result(report))
}
