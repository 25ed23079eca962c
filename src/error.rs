use std::fmt;

use thiserror::Error;

/// Maximum characters of a response body echoed into debug logs.
pub(crate) const MAX_ERROR_BODY_CHARS: usize = 200;

/// An error reported by the IAM service itself (any status other than 200).
///
/// Built from the first `<Error>` entry of the `<ErrorResponse>` envelope. When
/// the envelope is missing or empty, `code` is empty and `message` falls back
/// to the HTTP status line, so `message` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// IAM error code, e.g. `EntityAlreadyExists`. Empty when absent.
    pub code: String,
    /// Human-readable explanation of the error.
    pub message: String,
    /// Request id echoed by the service, if any.
    pub request_id: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.code.is_empty() {
            write!(f, "{}: {}", self.code, self.message)
        } else if self.status_code > 0 {
            write!(f, "{}: {}", self.status_code, self.message)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for ServiceError {}

/// Errors that can occur when calling the IAM API.
#[derive(Debug, Error)]
pub enum IamError {
    /// HTTP/network layer error from reqwest.
    #[error("HTTP request failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The configured endpoint is not a usable URL.
    #[error("invalid endpoint: {0}")]
    Endpoint(String),

    /// The service rejected the request.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A 200 response whose body does not match the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// Signature computation error.
    #[error("signature error: {0}")]
    Signature(String),

    /// Credential not found or invalid.
    #[error("credential error: {0}")]
    Credential(String),

    /// Client configuration error.
    #[error("config error: {0}")]
    Config(String),
}

impl IamError {
    /// Returns the HTTP status code if this is a service error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            IamError::Service(e) => Some(e.status_code),
            _ => None,
        }
    }

    /// Returns the IAM error code if this is a service error carrying one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            IamError::Service(e) if !e.code.is_empty() => Some(&e.code),
            _ => None,
        }
    }

    /// Returns the request ID if this is a service error carrying one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            IamError::Service(e) if !e.request_id.is_empty() => Some(&e.request_id),
            _ => None,
        }
    }
}

/// A specialized Result type for IAM operations.
pub type Result<T> = std::result::Result<T, IamError>;

/// Truncates a string to at most `max_chars` characters on a valid UTF-8 boundary.
pub(crate) fn truncate_str(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
