//! Error types for the HTTP transport.
//!
//! Provides structured error classification so callers can tell
//! transport, status and decoding failures apart when they care to.

use thiserror::Error;

/// Errors that can occur while talking to the admin backend.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Base URL and path do not form a valid URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Failed to connect to or talk with the backend
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Backend answered with a non-2xx status
    #[error("Backend error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode response from '{url}': {reason}")]
    Decode { url: String, reason: String },

    /// Envelope carried `success = false`
    #[error("Request rejected ({code}): {message}")]
    Rejected { code: i32, message: String },
}

impl RequestError {
    /// Classify a reqwest failure for the given URL.
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RequestError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_decode() {
            RequestError::Decode {
                url: url.to_string(),
                reason: err.to_string(),
            }
        } else {
            RequestError::Connection {
                url: url.to_string(),
                source: err,
            }
        }
    }

    /// Stable error kind string for logs and CLI output
    pub fn error_type(&self) -> &'static str {
        match self {
            RequestError::InvalidUrl { .. } => "invalid_url",
            RequestError::Client(_) => "client_error",
            RequestError::Connection { .. } => "connection_error",
            RequestError::Timeout { .. } => "request_timeout",
            RequestError::Status { .. } => "status_error",
            RequestError::Decode { .. } => "decode_error",
            RequestError::Rejected { .. } => "rejected",
        }
    }
}
