//! UI error types

use thiserror::Error;

/// Errors that can occur in the browse view
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal could not be set up, drawn to or restored
    #[error("Terminal error: {0}")]
    IoError(#[from] std::io::Error),

    /// Standard output is not a terminal
    #[error("The browse view needs an interactive terminal")]
    NotATerminal,
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
