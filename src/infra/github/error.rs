//! GitHub transport error types.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Longest slice of an error response body kept in the error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GitHub API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("fetch did not finish within {0:?}")]
    DeadlineExceeded(Duration),
}

impl TransportError {
    /// Build a `Status` error from a non-success response, keeping only the
    /// head of the body.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let body: String = String::from_utf8_lossy(body)
            .trim()
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect();
        Self::Status {
            status: status.as_u16(),
            body,
        }
    }

    /// Whether sending the same request again may succeed.
    ///
    /// Connection problems, timeouts, rate limiting and server errors are
    /// transient; other client errors (bad credentials, forbidden) are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::DeadlineExceeded(_) => false,
        }
    }
}
