//! Error types for the upload flow.
//!
//! The `Display` text of each variant is exactly what the user sees in the
//! error banner, so components can render `err.to_string()` directly.
//!
//! - [`UploadError::Request`] - the request could not be built
//! - [`UploadError::Server`] - the server answered with a failure status
//! - [`UploadError::Transport`] - the request never completed, or the body
//!   was not JSON

use thiserror::Error;

/// Errors raised while submitting files.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    /// Building the multipart body or the request failed.
    #[error("Connection error: {0}")]
    Request(String),

    /// Server-reported failure, already resolved to its display text.
    #[error("{0}")]
    Server(String),

    /// Network failure or undecodable response body.
    #[error("Connection error: {0}")]
    Transport(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_is_verbatim() {
        let err = UploadError::Server("bad file".to_string());
        assert_eq!(err.to_string(), "bad file");
    }

    #[test]
    fn test_transport_error_has_prefix() {
        let err = UploadError::Transport("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Connection error: Failed to fetch");
    }
}
