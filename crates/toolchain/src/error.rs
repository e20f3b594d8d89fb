use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolchainError>;

#[derive(Error, Debug)]
pub enum ToolchainError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
