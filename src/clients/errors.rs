//! HTTP-specific error types for the console client.
//!
//! This module contains error types for transport operations: non-2xx
//! responses, envelopes that report failure, request validation failures,
//! and network errors.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the backend
//! - [`BusinessError`]: 2xx responses whose envelope carries `success: false`
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use admin_console::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Business(e)) => println!("Rejected: {}", e),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::clients::ErrorShowType;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message carries the backend's `errorMessage` (or `message`) field when
/// the body is a JSON object that has one, and the raw status line otherwise.
///
/// # Example
///
/// ```rust
/// use admin_console::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "user 7 not found".to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 404: user 7 not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Error message extracted from the response.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when a 2xx response envelope reports `success: false`.
///
/// Carries the envelope's `errorCode`, `errorMessage` and `showType` so the
/// global error handler can decide how to surface it.
///
/// # Example
///
/// ```rust
/// use admin_console::clients::{BusinessError, ErrorShowType};
///
/// let error = BusinessError {
///     code: Some("USER_LOCKED".to_string()),
///     message: Some("account locked".to_string()),
///     show_type: ErrorShowType::Notification,
/// };
///
/// assert_eq!(error.to_string(), "request rejected [USER_LOCKED]: account locked");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "request rejected [{}]: {}",
    .code.as_deref().unwrap_or("-"),
    .message.as_deref().unwrap_or("no message")
)]
pub struct BusinessError {
    /// The envelope's `errorCode`, if any.
    pub code: Option<String>,
    /// The envelope's `errorMessage`, if any.
    pub message: Option<String>,
    /// How the error should be surfaced to the user.
    pub show_type: ErrorShowType,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A request path was not absolute.
    #[error("Request path '{path}' must start with '/'.")]
    RelativePath {
        /// The offending path.
        path: String,
    },

    /// A form body was not a flat object of scalar values.
    #[error("Form bodies must be flat objects of scalar values; field '{field}' is not.")]
    InvalidFormBody {
        /// The offending field, or `<root>` when the body is not an object.
        field: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A 2xx response whose envelope reported failure.
    #[error(transparent)]
    Business(#[from] BusinessError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, when the error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
