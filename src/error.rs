//! Error types for agent runs
//!
//! Run failures never reach the shell: the workspace turns them into
//! `Error: <message>` output text.

use thiserror::Error;

/// Failure of one outbound agent run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The request could not be sent or the body could not be read
    #[error("{0}")]
    Transport(String),

    /// The response body was not a JSON object
    #[error("{0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for RunError {
    fn from(e: reqwest::Error) -> Self {
        RunError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for RunError {
    fn from(e: serde_json::Error) -> Self {
        RunError::InvalidResponse(e.to_string())
    }
}
