//! Error types for the prompt engine

use thiserror::Error;

/// Fatal prompt errors.
///
/// Validation failures and confirmation mismatches are not errors: they are
/// reported inline by the prompt that owns them and never reach the caller.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The prompt was built in a way that can never produce an answer
    #[error("{0}")]
    Configuration(String),

    /// Reading keys or writing to the terminal failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key stream ended before the prompt was answered
    #[error("input stream closed before the prompt was answered")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, PromptError>;
