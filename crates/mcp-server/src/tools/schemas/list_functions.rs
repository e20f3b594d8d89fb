use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFunctionsRequest {
    #[schemars(description = "Path to the C/C++ source file.")]
    pub file_path: String,
}
