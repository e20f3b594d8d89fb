use clangd_toolchain::{run_command, split_lines, truncate_chars, ToolchainConfig};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use super::util::{file_not_found, read_source};

const MAX_LISTED_FUNCTIONS: usize = 80;
const MAX_SIGNATURE_CHARS: usize = 120;
const HEURISTIC_NOTE: &str = "regex-based, may miss some";

/// Single-line signature, optionally `const`, optionally opening a body.
static FUNCTION_SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w:*&<>\s]+\s+(\w[\w:]*)\s*\([^)]*\)\s*(const)?\s*\{?\s*$")
        .expect("function pattern is valid")
});

const CONTROL_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "return", "else"];

/// A function found either by ctags (`name (L12)`) or by the fallback scan (`L12: line`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FunctionEntry {
    pub(super) label: String,
    pub(super) location: String,
}

impl FunctionEntry {
    fn render_tag(&self) -> String {
        format!("  {} ({})", self.label, self.location)
    }

    fn render_scanned(&self) -> String {
        format!("  {}: {}", self.location, self.label)
    }
}

/// Parse `ctags -o -` output: `name<TAB>file<TAB>excmd<TAB>kind<TAB>line:N ...`.
pub(super) fn parse_ctags_output(output: &str) -> Vec<FunctionEntry> {
    output
        .lines()
        .filter(|line| !line.starts_with('!') && !line.trim().is_empty())
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 4 {
                return None;
            }
            let location = parts[3..]
                .iter()
                .find_map(|field| field.strip_prefix("line:"))
                .map(|n| format!("L{n}"))
                .unwrap_or_else(|| parts[3].to_string());
            Some(FunctionEntry {
                label: parts[0].to_string(),
                location,
            })
        })
        .collect()
}

/// Heuristic line scan used when ctags is unavailable.
pub(super) fn scan_function_signatures(text: &str) -> Vec<FunctionEntry> {
    let mut funcs = Vec::new();
    for (idx, line) in split_lines(text).enumerate() {
        let stripped = line.trim();
        if stripped.starts_with("//") || stripped.starts_with("/*") {
            continue;
        }
        let Some(caps) = FUNCTION_SIGNATURE.captures(stripped) else {
            continue;
        };
        if CONTROL_KEYWORDS.contains(&&caps[1]) {
            continue;
        }
        funcs.push(FunctionEntry {
            label: truncate_chars(stripped, MAX_SIGNATURE_CHARS).to_string(),
            location: format!("L{}", idx + 1),
        });
    }
    funcs
}

async fn list_with_ctags(config: &ToolchainConfig, file_path: &str) -> Option<Vec<FunctionEntry>> {
    let cmd = vec![
        config.ctags.clone(),
        "--fields=+n".to_string(),
        "-o".to_string(),
        "-".to_string(),
        "--c++-kinds=fp".to_string(),
        file_path.to_string(),
    ];
    let result = run_command(&cmd, None, config.timeouts.ctags()).await;
    if !result.success() || result.stdout.trim().is_empty() {
        log::debug!("ctags unavailable for {file_path}: {}", result.stderr.trim());
        return None;
    }
    let funcs = parse_ctags_output(&result.stdout);
    (!funcs.is_empty()).then_some(funcs)
}

pub(super) async fn compute_list_functions_report(
    config: &ToolchainConfig,
    file_path: &str,
) -> String {
    if !Path::new(file_path).exists() {
        return file_not_found(file_path);
    }

    if let Some(funcs) = list_with_ctags(config, file_path).await {
        let lines: Vec<String> = funcs.iter().map(FunctionEntry::render_tag).collect();
        return format!("Functions in {file_path}:\n{}", lines.join("\n"));
    }

    let text = match read_source(file_path) {
        Ok(text) => text,
        Err(message) => return message,
    };
    let funcs = scan_function_signatures(&text);
    if funcs.is_empty() {
        return format!("No functions found in {file_path} ({HEURISTIC_NOTE})");
    }
    let lines: Vec<String> = funcs
        .iter()
        .take(MAX_LISTED_FUNCTIONS)
        .map(FunctionEntry::render_scanned)
        .collect();
    format!(
        "Functions in {file_path} ({}, {HEURISTIC_NOTE}):\n{}",
        funcs.len(),
        lines.join("\n")
    )
}
