//! Error type for backend calls.
//!
//! The backend reports failures with a JSON body of the shape
//! `{"detail": "..."}`. The UI surfaces that detail verbatim when present
//! and a view-specific generic message otherwise; it draws no distinction
//! between 4xx, 5xx, and transport errors beyond that.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single backend request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success HTTP response, with the parsed `detail` when the body
    /// carried one.
    #[error("backend returned status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The request never completed (DNS, connection, fetch failure).
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Shape of the backend's error bodies.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    /// Message to show the user: the backend's `detail` verbatim when
    /// present, else the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}
