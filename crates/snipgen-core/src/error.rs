use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnipgenError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Input from {source_name} is not valid UTF-8 (use --lossy to drop invalid bytes)")]
    Encoding { source_name: String },
}

pub type Result<T> = std::result::Result<T, SnipgenError>;
