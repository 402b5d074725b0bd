use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StandupError>;

#[derive(Error, Debug)]
pub enum StandupError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Traversal error: {0}")]
    Traversal(#[from] walkdir::Error),
    #[error("git is not installed or not in PATH")]
    GitNotFound,
    #[error("git command failed (exit code {exit_code}): {stderr}")]
    Extraction { stderr: String, exit_code: i32 },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
