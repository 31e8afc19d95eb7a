//! Client error types

use thiserror::Error;

use crate::session::SessionStoreError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request aborted after exceeding the attempt's timeout
    #[error("Request timed out")]
    Timeout,

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the token; the stored session has been cleared
    #[error("Session expired")]
    SessionExpired,

    /// Client-side precondition failure, no request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-reported business error (message passed through when present)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response was not the expected JSON shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session store failure
    #[error("Session store error: {0}")]
    Session(#[from] SessionStoreError),
}

impl ClientError {
    /// Whether another attempt may be made for this failure.
    ///
    /// Timeouts and 401s are never retried; local failures never reach the
    /// network in the first place.
    pub(crate) fn is_retryable(&self) -> bool {
        !matches!(
            self,
            Self::Timeout | Self::SessionExpired | Self::Validation(_) | Self::Session(_)
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
