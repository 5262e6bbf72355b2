//! Error type for API round-trips.

use thiserror::Error;

/// Message used when a failed response carries no `error` string.
pub const GENERIC_REQUEST_FAILURE: &str = "Request failed";

/// Message used when the initial load fails without any detail.
pub const GENERIC_LOAD_FAILURE: &str = "Failed to load data";

/// The one failure a request can surface.
///
/// Network errors, unparseable bodies and non-2xx statuses all collapse
/// into this, and its `Display` is the bare message so it can be shown to
/// the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    RequestFailed(String),
}

impl ApiError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::RequestFailed(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::RequestFailed(message) => message,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::RequestFailed(format!("Invalid JSON response: {}", err))
    }
}
