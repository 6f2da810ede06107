//! Custom error types for the application.
//!
//! The only fallible boundary in the system is fetching static assets
//! (episode feed, header/footer partials), so a single [`FetchError`] covers
//! it. The sanitizer is intentionally infallible and has no error type.

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, connection reset, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}
