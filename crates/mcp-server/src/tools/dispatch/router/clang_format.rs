use super::super::{
    arg_or, compute_clang_format_report, text_result, CallToolResult, ClangFormatRequest,
    ClangdMcpService, McpError,
};

const DEFAULT_STYLE: &str = "file";

/// clang-format preview (default) or in-place rewrite.
pub(in crate::tools::dispatch) async fn clang_format(
    service: &ClangdMcpService,
    request: ClangFormatRequest,
) -> Result<CallToolResult, McpError> {
    let style = arg_or(request.style.as_deref(), DEFAULT_STYLE);
    let dry_run = request.dry_run.unwrap_or(true);
    log::debug!(
        "clang_format {} (style={style}, dry_run={dry_run})",
        request.file_path
    );

    let report =
        compute_clang_format_report(service.config(), &request.file_path, style, dry_run).await;
    Ok(text_result(report))
}
