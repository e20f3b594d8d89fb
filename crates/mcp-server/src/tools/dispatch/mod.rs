//! MCP tool dispatch for clangd-mcp
//!
//! Resolves request defaults, runs the per-tool report computation and wraps the report
//! as a single text content item.

use super::catalog;
use super::check_file::compute_check_file_report;
use super::clang_format::compute_clang_format_report;
use super::find_symbol::compute_find_symbol_report;
use super::get_includes::compute_includes_report;
use super::list_functions::compute_list_functions_report;
use super::schemas::check_file::CheckFileRequest;
use super::schemas::clang_format::ClangFormatRequest;
use super::schemas::find_symbol::FindSymbolRequest;
use super::schemas::get_includes::GetIncludesRequest;
use super::schemas::list_functions::ListFunctionsRequest;
use clangd_toolchain::ToolchainConfig;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ErrorData as McpError, ServerHandler};
use std::sync::Arc;

mod router;

/// clangd-mcp MCP service
#[derive(Clone)]
pub struct ClangdMcpService {
    /// Tool router
    tool_router: ToolRouter<Self>,
    /// Toolchain settings, fixed at startup
    config: Arc<ToolchainConfig>,
}

impl ClangdMcpService {
    pub fn new(config: ToolchainConfig) -> Self {
        Self {
            tool_router: router::build_tool_router(),
            config: Arc::new(config),
        }
    }

    pub(super) fn config(&self) -> &ToolchainConfig {
        &self.config
    }
}

impl Default for ClangdMcpService {
    fn default() -> Self {
        Self::new(ToolchainConfig::default())
    }
}

#[tool_handler]
impl ServerHandler for ClangdMcpService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

fn text_result(report: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(report)])
}

/// Trimmed optional argument, or `default` when absent/blank.
fn arg_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests;
