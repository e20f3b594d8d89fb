use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FindSymbolRequest {
    /// Symbol name or regex
    #[schemars(description = "Symbol name to search for (supports regex).")]
    pub symbol: String,

    /// Directory to search (default: "src")
    #[schemars(description = "Directory to search in (default: src).")]
    pub directory: Option<String>,

    /// File suffixes (default: ".cpp,.h,.hpp,.c")
    #[schemars(description = "Comma-separated file extensions to search (default: .cpp,.h,.hpp,.c).")]
    pub extensions: Option<String>,
}
