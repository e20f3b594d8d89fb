use super::super::{
    arg_or, compute_find_symbol_report, text_result, CallToolResult, ClangdMcpService,
    FindSymbolRequest, McpError,
};
use regex::RegexBuilder;

use super::error::{internal_error, invalid_request};

const DEFAULT_DIRECTORY: &str = "src";
const DEFAULT_EXTENSIONS: &str = ".cpp,.h,.hpp,.c";

fn build_regex(pattern: &str) -> Result<regex::Regex, String> {
    RegexBuilder::new(pattern)
        .build()
        .map_err(|err| format!("Invalid regex '{pattern}': {err}"))
}

/// Regex search across the source tree (blocking walk off the async runtime).
pub(in crate::tools::dispatch) async fn find_symbol(
    _service: &ClangdMcpService,
    request: FindSymbolRequest,
) -> Result<CallToolResult, McpError> {
    if request.symbol.is_empty() {
        return Ok(invalid_request("Symbol pattern must not be empty"));
    }
    let regex = match build_regex(&request.symbol) {
        Ok(re) => re,
        Err(msg) => return Ok(invalid_request(msg)),
    };

    let directory = arg_or(request.directory.as_deref(), DEFAULT_DIRECTORY).to_string();
    let extensions = arg_or(request.extensions.as_deref(), DEFAULT_EXTENSIONS).to_string();
    log::debug!(
        "find_symbol '{}' in {directory} ({extensions})",
        request.symbol
    );

    let symbol = request.symbol;
    let report = tokio::task::spawn_blocking(move || {
        compute_find_symbol_report(&regex, &symbol, &directory, &extensions)
    })
    .await;
    match report {
        Ok(report) => Ok(text_result(report)),
        Err(err) => Ok(internal_error(format!("find_symbol task failed: {err}"))),
    }
}
