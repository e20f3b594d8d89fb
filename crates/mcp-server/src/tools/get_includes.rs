use clangd_toolchain::split_lines;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::Path;

use super::util::{file_not_found, read_source};

static INCLUDE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*#\s*include\s*([<"])(.+?)[>"]"#).expect("include pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum IncludeKind {
    /// `#include <...>`
    System,
    /// `#include "..."`
    Local,
}

impl fmt::Display for IncludeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad so headers line up in the listing.
        f.pad(match self {
            Self::System => "system",
            Self::Local => "local",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct IncludeEntry {
    pub(super) line: usize,
    pub(super) header: String,
    pub(super) kind: IncludeKind,
}

/// Syntactic `#include` extraction; headers are not resolved against any search path.
pub(super) fn parse_includes(text: &str) -> Vec<IncludeEntry> {
    split_lines(text)
        .enumerate()
        .filter_map(|(idx, line)| {
            let caps = INCLUDE_DIRECTIVE.captures(line)?;
            let kind = if &caps[1] == "<" {
                IncludeKind::System
            } else {
                IncludeKind::Local
            };
            Some(IncludeEntry {
                line: idx + 1,
                header: caps[2].to_string(),
                kind,
            })
        })
        .collect()
}

pub(super) fn compute_includes_report(file_path: &str) -> String {
    if !Path::new(file_path).exists() {
        return file_not_found(file_path);
    }
    let text = match read_source(file_path) {
        Ok(text) => text,
        Err(message) => return message,
    };

    let includes = parse_includes(&text);
    if includes.is_empty() {
        return format!("No #include directives found in {file_path}");
    }

    let mut out = format!("Includes in {file_path}:\n");
    for inc in &includes {
        out.push_str(&format!("  L{}: {:6} {}\n", inc.line, inc.kind, inc.header));
    }
    out
}
