//! Error types for divination sessions.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during a divination session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// All six lines are in; reset before tossing again.
    #[error("the reading is complete; use 'reset' to start over")]
    ReadingComplete,

    /// No completed reading to show.
    #[error("no reading yet; use 'toss' or 'cast'")]
    NoReading,

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Divination core error.
    #[error("{0}")]
    Core(#[from] yj_core::YiError),
}
