use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ClangFormatRequest {
    /// File to format
    #[schemars(description = "Path to the C/C++ source file.")]
    pub file_path: String,

    /// clang-format style (default: "file")
    #[schemars(
        description = "Formatting style: file, llvm, google, chromium, mozilla, webkit (default: file)."
    )]
    pub style: Option<String>,

    /// Preview only (default: true)
    #[schemars(
        description = "If true (default), show a diff without modifying the file. If false, format in place."
    )]
    pub dry_run: Option<bool>,
}
