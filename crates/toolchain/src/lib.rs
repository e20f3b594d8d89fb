//! Toolchain plumbing for clangd-mcp
//!
//! Runs external C/C++ tools (clangd, compilers, ctags, clang-format) with a bounded
//! timeout, discovers which of them are installed, and walks source trees for the
//! file-scanning tools.
//!
//! ## Example
//!
//! ```no_run
//! use clangd_toolchain::{find_executable, run_command};
//! use std::time::Duration;
//!
//! # async fn example() {
//! let clangd = find_executable(&["clangd", "clangd-18"], Duration::from_secs(5)).await;
//! if !clangd.is_empty() {
//!     let result = run_command(&[clangd, "--version".to_string()], None, Duration::from_secs(5)).await;
//!     println!("{}", result.stdout);
//! }
//! # }
//! ```

mod config;
mod discovery;
mod error;
mod runner;
mod scanner;
mod text;

pub use config::{CompilerDialect, Timeouts, ToolchainConfig};
pub use discovery::find_executable;
pub use error::{Result, ToolchainError};
pub use runner::{run_command, CommandResult, RunOutcome};
pub use scanner::SourceScanner;
pub use text::{read_lossy, split_lines, truncate_chars};
