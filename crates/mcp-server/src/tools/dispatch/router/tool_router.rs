use super::super::*;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_router};

pub(super) fn build_tool_router() -> ToolRouter<ClangdMcpService> {
    ClangdMcpService::tool_router()
}

#[tool_router]
impl ClangdMcpService {
    /// clangd diagnostics for a file.
    #[tool(
        description = "Run clangd diagnostics on a C/C++ file. Reports errors, warnings, and notes. Falls back to a compiler syntax-only check when clangd is not installed."
    )]
    pub async fn check_file(
        &self,
        Parameters(request): Parameters<CheckFileRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::check_file::check_file(self, request).await
    }

    /// Regex symbol search across source files.
    #[tool(
        description = "Search for a symbol (function, class, variable) across C/C++ files. The symbol is a regex matched anywhere in each line; hidden, build and external directories are skipped."
    )]
    pub async fn find_symbol(
        &self,
        Parameters(request): Parameters<FindSymbolRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::find_symbol::find_symbol(self, request).await
    }

    /// `#include` listing.
    #[tool(
        description = "List all #include directives in a C/C++ file with line numbers, classified as system (<...>) or local (\"...\")."
    )]
    pub async fn get_includes(
        &self,
        Parameters(request): Parameters<GetIncludesRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::get_includes::get_includes(self, request).await
    }

    /// Function listing via ctags, regex fallback.
    #[tool(
        description = "Extract function/method declarations and definitions from a C/C++ file using ctags, or a regex heuristic when ctags is unavailable."
    )]
    pub async fn list_functions(
        &self,
        Parameters(request): Parameters<ListFunctionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::list_functions::list_functions(self, request).await
    }

    /// clang-format preview or in-place formatting.
    #[tool(
        description = "Format a C/C++ file using clang-format. dry_run=true (default) shows a line diff without modifying the file; dry_run=false formats in place."
    )]
    pub async fn clang_format(
        &self,
        Parameters(request): Parameters<ClangFormatRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::clang_format::clang_format(self, request).await
    }
}
