//! Transport seam between the API client and whatever actually moves bytes.
//!
//! The browser build plugs in `fetch`; tests plug in a scripted fake.

use async_trait::async_trait;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// An outgoing request. The body, if any, is already JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Every request is sent with this content type, body or not.
    pub const CONTENT_TYPE: &'static str = "application/json";
}

/// A completed response with its body read as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and waits for the full response.
///
/// Implementations only fail when no response arrives at all; HTTP error
/// statuses are returned as ordinary responses.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
