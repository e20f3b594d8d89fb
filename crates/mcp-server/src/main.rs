//! clangd-mcp server
//!
//! Exposes C/C++ code analysis to AI agents via MCP protocol, by driving clangd, ctags,
//! clang-format and the host compilers.
//!
//! ## Tools
//!
//! - `check_file` - clangd diagnostics (compiler syntax-check fallback)
//! - `find_symbol` - Regex symbol search across C/C++ sources
//! - `get_includes` - `#include` directives, system vs local
//! - `list_functions` - Functions via ctags (regex fallback)
//! - `clang_format` - Diff preview or in-place formatting
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "clangd": {
//!       "command": "clangd-mcp",
//!       "args": ["--config", "/path/to/clangd-mcp.toml"]
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use clangd_toolchain::ToolchainConfig;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::env;
use std::path::PathBuf;

#[cfg(test)]
mod test_support;
mod tools;

use tools::catalog;
use tools::ClangdMcpService;

fn print_help() {
    println!("clangd-mcp: MCP server for C/C++ code analysis");
    println!();
    println!("Usage: clangd-mcp [--config <path>] [--print-tools|--version|--help]");
    println!();
    println!("Flags:");
    println!("  --config <path>  Load toolchain settings from a TOML file");
    println!("  --print-tools    Print tool inventory as JSON and exit");
    println!("  --version        Print version and exit");
    println!("  --help           Print this help and exit");
}

enum CliAction {
    Serve { config_path: Option<PathBuf> },
    Exit(i32),
}

fn handle_cli_args() -> CliAction {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut config_path: Option<PathBuf> = None;

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--print-tools" => {
                let payload = catalog::tool_inventory_json(env!("CARGO_PKG_VERSION"));
                println!("{payload}");
                return CliAction::Exit(0);
            }
            "--version" | "-V" => {
                println!("clangd-mcp {}", env!("CARGO_PKG_VERSION"));
                return CliAction::Exit(0);
            }
            "--help" | "-h" => {
                print_help();
                return CliAction::Exit(0);
            }
            "--config" => match it.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--config requires a path");
                    print_help();
                    return CliAction::Exit(2);
                }
            },
            _ => {
                eprintln!("Unknown arguments: {}", args.join(" "));
                print_help();
                return CliAction::Exit(2);
            }
        }
    }

    CliAction::Serve { config_path }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = match handle_cli_args() {
        CliAction::Serve { config_path } => config_path,
        CliAction::Exit(code) => std::process::exit(code),
    };

    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = match config_path {
        Some(path) => ToolchainConfig::from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ToolchainConfig::default(),
    };
    log::debug!("toolchain config: {config:?}");

    log::info!("Starting clangd-mcp server");

    let service = ClangdMcpService::new(config);
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("clangd-mcp server stopped");
    Ok(())
}
