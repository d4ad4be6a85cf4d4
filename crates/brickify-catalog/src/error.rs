//! Error types for backend communication.

use thiserror::Error;

/// Failure talking to the catalog backend.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The backend answered with a non-success status code.
    #[error("unexpected response code: {0}")]
    Status(u16),

    /// The request never got a response (DNS, connect, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be read or decoded.
    #[error("decode error: {0}")]
    Decode(#[from] std::io::Error),

    /// The base URL cannot have path segments appended.
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),

    /// The request body could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<ureq::Error> for CatalogError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(code, _) => CatalogError::Status(code),
            ureq::Error::Transport(transport) => CatalogError::Transport(transport.to_string()),
        }
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(error: url::ParseError) -> Self {
        CatalogError::InvalidUrl(error.to_string())
    }
}

/// A specialized Result type for backend operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
