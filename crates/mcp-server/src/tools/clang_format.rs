use clangd_toolchain::{find_executable, run_command, ToolchainConfig};
use std::path::Path;

use super::util::{file_not_found, read_source};

const MAX_DIFF_ENTRIES: usize = 30;

/// Per-line comparison of `original` and `formatted` (same index, literal inequality).
pub(super) fn line_diff(original: &str, formatted: &str) -> Vec<String> {
    let orig_lines: Vec<&str> = original.split('\n').collect();
    let fmt_lines: Vec<&str> = formatted.split('\n').collect();

    let mut diffs: Vec<String> = orig_lines
        .iter()
        .zip(fmt_lines.iter())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(idx, (a, b))| format!("  L{}:\n    - {a}\n    + {b}", idx + 1))
        .collect();
    if orig_lines.len() != fmt_lines.len() {
        diffs.push(format!(
            "  Line count: {} -> {}",
            orig_lines.len(),
            fmt_lines.len()
        ));
    }
    diffs
}

pub(super) async fn compute_clang_format_report(
    config: &ToolchainConfig,
    file_path: &str,
    style: &str,
    dry_run: bool,
) -> String {
    if !Path::new(file_path).exists() {
        return file_not_found(file_path);
    }

    let clang_format =
        find_executable(&config.clang_format_candidates, config.timeouts.probe()).await;
    if clang_format.is_empty() {
        return format!(
            "clang-format is not installed (tried: {}).",
            config.clang_format_candidates.join(", ")
        );
    }

    let mut cmd = vec![clang_format, format!("--style={style}")];
    if !dry_run {
        cmd.push("-i".to_string());
        cmd.push(file_path.to_string());
        let result = run_command(&cmd, None, config.timeouts.format()).await;
        if result.success() {
            return format!("Formatted {file_path} in place.");
        }
        return format!("clang-format failed: {}", result.stderr);
    }

    let original = match read_source(file_path) {
        Ok(text) => text,
        Err(message) => return message,
    };
    cmd.push(file_path.to_string());
    let result = run_command(&cmd, None, config.timeouts.format()).await;
    if !result.success() {
        return format!("clang-format failed: {}", result.stderr);
    }
    if result.stdout == original {
        return format!("File {file_path} is already formatted.");
    }

    let diffs = line_diff(&original, &result.stdout);
    let shown: Vec<&str> = diffs
        .iter()
        .take(MAX_DIFF_ENTRIES)
        .map(String::as_str)
        .collect();
    format!("Format changes for {file_path}:\n{}", shown.join("\n"))
}
