//! Error types for brickify.

use thiserror::Error;

/// The main error type for brickify operations.
///
/// Camera and viewport operations are total and never produce this error;
/// it covers configuration and the application shell around them.
#[derive(Error, Debug)]
pub enum BrickifyError {
    /// An option value failed validation.
    #[error("invalid option '{name}': {reason}")]
    InvalidOption { name: &'static str, reason: String },

    /// The window or event loop could not be created.
    #[error("window error: {0}")]
    Window(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for brickify operations.
pub type Result<T> = std::result::Result<T, BrickifyError>;
