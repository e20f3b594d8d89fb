use clangd_toolchain::read_lossy;
use std::path::Path;

/// Longest raw tool output echoed back in a report.
pub(super) const MAX_RAW_OUTPUT_CHARS: usize = 3_000;

pub(super) fn file_not_found(file_path: &str) -> String {
    format!("File not found: {file_path}")
}

/// Read a source file for a report, or render why it could not be read.
pub(super) fn read_source(file_path: &str) -> Result<String, String> {
    read_lossy(Path::new(file_path)).map_err(|err| format!("Failed to read {file_path}: {err}"))
}
