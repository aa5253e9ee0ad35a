//! Error types for txfeed-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use txfeed_core::FeedError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The same action is already running
    #[error("Action '{action}' is already in progress")]
    Busy { action: String },

    #[error("Upstream error: {message}")]
    Upstream { message: String },
}

impl From<FeedError> for ApiError {
    fn from(error: FeedError) -> Self {
        match error {
            FeedError::Busy { action } => ApiError::Busy { action },
            other => ApiError::Upstream {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Busy { .. } => StatusCode::CONFLICT,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}
