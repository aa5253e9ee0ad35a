//! Error types for txfeed-core
//!
//! Every remote call fails in one of three ways (transport, status, body);
//! callers treat them uniformly and choose their own fallback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Network or transport failure
    Transport,
    /// Non-2xx response
    BadStatus,
    /// Response body could not be parsed
    Decode,
    /// Action already in flight
    Busy,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::Transport => write!(f, "TRANSPORT"),
            ErrorCode::BadStatus => write!(f, "BAD_STATUS"),
            ErrorCode::Decode => write!(f, "DECODE"),
            ErrorCode::Busy => write!(f, "BUSY"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Feed error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    #[error("Request failed: {message}")]
    Transport { message: String },

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {message}")]
    Decode { message: String },

    #[error("Action '{action}' is already in progress")]
    Busy { action: String },
}

impl FeedError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            FeedError::Transport { .. } => ErrorCode::Transport,
            FeedError::Status { .. } => ErrorCode::BadStatus,
            FeedError::Decode { .. } => ErrorCode::Decode,
            FeedError::Busy { .. } => ErrorCode::Busy,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FeedError::Busy { .. } => ErrorSeverity::Info,
            FeedError::Status { status, .. } if *status < 500 => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// True for the refused-trigger case rather than a remote failure
    pub fn is_busy(&self) -> bool {
        matches!(self, FeedError::Busy { .. })
    }
}
