//! # Errors
//!
//! Everything a prompt call can fail with. Validation failures are not in
//! here: they are handled inside the loop and turned into a re-prompt.
use thiserror::Error;

/// Result type alias for prompt calls.
pub type Result<T> = std::result::Result<T, AskError>;

/// Errors returned by [`crate::utils::Ask::run`] and friends.
///
/// - [`AskError::Configuration`]: the call was built with invalid settings, nothing was prompted.
/// - [`AskError::Timeout`]: the time budget ran out and no default was set.
/// - [`AskError::RetryLimit`]: every allowed attempt was used and no default was set.
/// - [`AskError::Eof`]: the input stream closed before valid input arrived.
/// - [`AskError::Io`]: reading from or writing to the console failed.
#[derive(Debug, Error)]
pub enum AskError {
    #[error("Invalid prompt configuration: {0}")]
    Configuration(String),

    #[error("No valid input was entered before the timeout")]
    Timeout,

    #[error("No valid input was entered within the retry limit")]
    RetryLimit,

    #[error("Input stream closed before valid input was entered")]
    Eof,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
