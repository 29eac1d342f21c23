//! Error types for the Herald client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the Atlassian APIs
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection-level failure: DNS, TLS, refused connection, broken body
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status above 299
    #[error("API error (status {status}): {body}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// Response body is not valid JSON of the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Response decoded but a required field is missing or mistyped
    #[error("Unexpected response: {0}")]
    Type(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create a remote error from status code and body
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            body: body.into(),
        }
    }

    /// The HTTP status of a remote error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
