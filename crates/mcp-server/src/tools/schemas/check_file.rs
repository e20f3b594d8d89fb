use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckFileRequest {
    /// Source file to diagnose
    #[schemars(description = "Path to the C/C++ source file.")]
    pub file_path: String,

    /// Build directory (default: "build")
    #[schemars(
        description = "Path to the build directory; compile_commands.json is used when present there (default: build)."
    )]
    pub build_dir: Option<String>,
}
