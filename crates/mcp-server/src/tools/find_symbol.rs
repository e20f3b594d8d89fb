use clangd_toolchain::{read_lossy, split_lines, SourceScanner};
use regex::Regex;
use std::path::PathBuf;

const MAX_LISTED_MATCHES: usize = 50;

/// One line matching the symbol pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SymbolMatch {
    pub(super) file_path: PathBuf,
    pub(super) line_number: usize,
    pub(super) line_text: String,
}

/// Every line under `directory` (filtered by suffix) where `pattern` occurs, in walk order.
pub(super) fn collect_symbol_matches(
    pattern: &Regex,
    directory: &str,
    extensions: &str,
) -> Vec<SymbolMatch> {
    let scanner = SourceScanner::new(directory, SourceScanner::parse_extensions(extensions));
    let mut matches = Vec::new();

    for file_path in scanner.scan() {
        let text = match read_lossy(&file_path) {
            Ok(text) => text,
            Err(err) => {
                log::debug!("Skipping unreadable {}: {err}", file_path.display());
                continue;
            }
        };
        for (idx, line) in split_lines(&text).enumerate() {
            if pattern.is_match(line) {
                matches.push(SymbolMatch {
                    file_path: file_path.clone(),
                    line_number: idx + 1,
                    line_text: line.trim_end().to_string(),
                });
            }
        }
    }

    matches
}

pub(super) fn compute_find_symbol_report(
    pattern: &Regex,
    symbol: &str,
    directory: &str,
    extensions: &str,
) -> String {
    let matches = collect_symbol_matches(pattern, directory, extensions);
    if matches.is_empty() {
        return format!("Symbol '{symbol}' not found in {directory}");
    }

    let mut out = format!("Found {} match(es) for '{symbol}':\n", matches.len());
    let listed: Vec<String> = matches
        .iter()
        .take(MAX_LISTED_MATCHES)
        .map(|m| {
            format!(
                "  {}:{}: {}",
                m.file_path.display(),
                m.line_number,
                m.line_text
            )
        })
        .collect();
    out.push_str(&listed.join("\n"));
    if matches.len() > MAX_LISTED_MATCHES {
        out.push_str("\n...");
    }
    out
}
