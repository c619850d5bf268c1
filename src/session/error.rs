//! Session errors

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while running a gesture session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source error: {0}")]
    Source(String),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
