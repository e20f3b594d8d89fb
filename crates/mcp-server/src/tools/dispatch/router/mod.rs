// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod check_file;
pub(super) mod clang_format;
pub(super) mod error;
pub(super) mod find_symbol;
pub(super) mod get_includes;
pub(super) mod list_functions;

mod tool_router;

pub(super) fn build_tool_router(
) -> rmcp::handler::server::tool::ToolRouter<super::ClangdMcpService> {
    tool_router::build_tool_router()
}
