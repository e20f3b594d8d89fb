#![allow(dead_code)]

use anyhow::{Context, Result};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::service::{RunningService, ServiceExt};
use rmcp::RoleClient;
use rmcp::transport::TokioChildProcess;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

pub fn locate_clangd_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_clangd-mcp") {
        return Ok(PathBuf::from(path));
    }

    // Cargo doesn't always expose CARGO_BIN_EXE_* at runtime. Derive it from the test exe path:
    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/clangd-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("clangd-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/clangd-mcp", "target/release/clangd-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate clangd-mcp binary; build with: cargo build -p clangd-mcp")
}

/// Writes a config that points every external tool at a binary that does not exist,
/// so tool output does not depend on what the host has installed.
pub fn write_offline_config(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("clangd-mcp.toml");
    std::fs::write(
        &path,
        r#"
clangd_candidates = ["clangd-mcp-test-missing-clangd"]
compilers = ["clangd-mcp-test-missing-cc"]
ctags = "clangd-mcp-test-missing-ctags"
clang_format_candidates = ["clangd-mcp-test-missing-format"]

[timeouts]
probe = 2
"#,
    )
    .context("write offline config")?;
    Ok(path)
}

pub async fn start_server(config: Option<&Path>) -> Result<RunningService<RoleClient, ()>> {
    let bin = locate_clangd_mcp_bin()?;
    let mut cmd = Command::new(bin);
    if let Some(config) = config {
        cmd.arg("--config").arg(config);
    }
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("MCP handshake failed")
}

pub async fn call_tool(
    service: &RunningService<RoleClient, ()>,
    name: &'static str,
    arguments: serde_json::Value,
) -> Result<CallToolResult> {
    let arguments = arguments
        .as_object()
        .cloned()
        .context("tool arguments must be a JSON object")?;
    tokio::time::timeout(
        Duration::from_secs(20),
        service.call_tool(CallToolRequestParam {
            name: name.into(),
            arguments: Some(arguments),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))?
    .with_context(|| format!("call {name}"))
}

pub fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text().map(|t| t.text.clone()))
        .collect::<Vec<_>>()
        .join("\n")
}
