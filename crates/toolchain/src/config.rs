use crate::error::{Result, ToolchainError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Flag dialect of a compiler used for the syntax-only fallback check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerDialect {
    Gnu,
    Msvc,
}

impl CompilerDialect {
    pub fn for_compiler(name: &str) -> Self {
        let base = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name);
        if base.eq_ignore_ascii_case("cl") || base.eq_ignore_ascii_case("cl.exe") {
            Self::Msvc
        } else {
            Self::Gnu
        }
    }
}

/// Per-tool timeouts, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timeouts {
    pub probe: u64,
    pub check: u64,
    pub compiler: u64,
    pub ctags: u64,
    pub format: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            probe: 5,
            check: 30,
            compiler: 15,
            ctags: 10,
            format: 10,
        }
    }
}

impl Timeouts {
    pub fn probe(&self) -> Duration {
        Duration::from_secs(self.probe)
    }

    pub fn check(&self) -> Duration {
        Duration::from_secs(self.check)
    }

    pub fn compiler(&self) -> Duration {
        Duration::from_secs(self.compiler)
    }

    pub fn ctags(&self) -> Duration {
        Duration::from_secs(self.ctags)
    }

    pub fn format(&self) -> Duration {
        Duration::from_secs(self.format)
    }
}

/// Which external binaries to try, and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
    pub clangd_candidates: Vec<String>,
    pub compilers: Vec<String>,
    /// Language standard for the GNU-dialect syntax check. Fixed, not inferred per file.
    pub cxx_standard: String,
    pub ctags: String,
    pub clang_format_candidates: Vec<String>,
    pub timeouts: Timeouts,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            clangd_candidates: strings(&["clangd", "clangd-18", "clangd-17", "clangd-16"]),
            compilers: strings(&["clang++", "cl", "g++"]),
            cxx_standard: "c++11".to_string(),
            ctags: "ctags".to_string(),
            clang_format_candidates: strings(&[
                "clang-format",
                "clang-format-18",
                "clang-format-17",
                "clang-format-16",
            ]),
            timeouts: Timeouts::default(),
        }
    }
}

impl ToolchainConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ToolchainError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw).map_err(|source| ToolchainError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Syntax-only check command for `compiler`, in that compiler's flag dialect.
    pub fn syntax_check_command(&self, compiler: &str, file_path: &str) -> Vec<String> {
        match CompilerDialect::for_compiler(compiler) {
            CompilerDialect::Msvc => strings(&[compiler, "/Zs", "/EHsc", file_path]),
            CompilerDialect::Gnu => vec![
                compiler.to_string(),
                "-fsyntax-only".to_string(),
                format!("-std={}", self.cxx_standard),
                file_path.to_string(),
            ],
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
