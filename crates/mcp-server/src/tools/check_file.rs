use clangd_toolchain::{find_executable, run_command, truncate_chars, ToolchainConfig};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use super::util::{file_not_found, MAX_RAW_OUTPUT_CHARS};

/// `<path>:<line>:<col>: <severity>: ...`
static DIAGNOSTIC_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.+:\d+:\d+: (?:error|warning|note):").expect("diagnostic pattern is valid")
});

/// Lines of `output` that look like compiler diagnostics, in emission order.
pub(super) fn extract_diagnostics(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| DIAGNOSTIC_LINE.is_match(line))
        .collect()
}

/// Diagnose `file_path` with clangd, falling back to a compiler syntax check.
pub(super) async fn compute_check_file_report(
    config: &ToolchainConfig,
    file_path: &str,
    build_dir: &str,
) -> String {
    if !Path::new(file_path).exists() {
        return file_not_found(file_path);
    }

    let clangd = find_executable(&config.clangd_candidates, config.timeouts.probe()).await;
    if clangd.is_empty() {
        log::debug!("clangd not found; falling back to compiler syntax check");
        return check_with_compiler(config, file_path).await;
    }

    let mut cmd = vec![clangd, format!("--check={file_path}")];
    if Path::new(build_dir).join("compile_commands.json").exists() {
        cmd.push(format!("--compile-commands-dir={build_dir}"));
    }

    let result = run_command(&cmd, None, config.timeouts.check()).await;
    let output = result.stderr.as_str();

    let diagnostics = extract_diagnostics(output);
    if !diagnostics.is_empty() {
        return format!("Diagnostics for {file_path}:\n{}", diagnostics.join("\n"));
    }
    if !output.trim().is_empty() {
        return format!(
            "clangd output:\n{}",
            truncate_chars(output, MAX_RAW_OUTPUT_CHARS)
        );
    }
    format!("No issues found in {file_path}")
}

async fn check_with_compiler(config: &ToolchainConfig, file_path: &str) -> String {
    for compiler in &config.compilers {
        let cmd = config.syntax_check_command(compiler, file_path);
        let result = run_command(&cmd, None, config.timeouts.compiler()).await;
        if result.is_not_found() {
            log::debug!("compiler {compiler} not available");
            continue;
        }
        if result.success() {
            return format!("No syntax errors in {file_path}");
        }
        // MSVC reports diagnostics on stdout.
        let details = if result.stderr.trim().is_empty() {
            &result.stdout
        } else {
            &result.stderr
        };
        return format!(
            "Issues found ({compiler}):\n{}",
            truncate_chars(details, MAX_RAW_OUTPUT_CHARS)
        );
    }

    let tried: Vec<&str> = config
        .clangd_candidates
        .iter()
        .chain(config.compilers.iter())
        .map(String::as_str)
        .collect();
    format!(
        "No compatible C/C++ tool is installed (tried: {}). Install clangd, clang++, or g++.",
        tried.join(", ")
    )
}
