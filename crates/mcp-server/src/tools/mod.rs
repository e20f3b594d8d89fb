//! clangd-mcp tool surface.
//!
//! Each tool computes its plain-text report in its own module; `dispatch` owns the MCP
//! service, the request schemas live in `schemas`.

pub(crate) mod catalog;
mod check_file;
mod clang_format;
mod dispatch;
mod find_symbol;
mod get_includes;
mod list_functions;
mod schemas;
mod util;

pub use dispatch::ClangdMcpService;
