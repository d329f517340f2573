//! Resource-level error types.
//!
//! [`RestError`] wraps transport failures without altering them and adds the
//! two failures a resource service can cause itself: a payload that cannot
//! be encoded, and a response that is not a valid envelope.
//!
//! # Example
//!
//! ```rust,ignore
//! use admin_console::rest::RestError;
//! use admin_console::HttpError;
//!
//! match users.find_by_id(7).await {
//!     Ok(envelope) => println!("{:?}", envelope.data),
//!     Err(RestError::Http(HttpError::Response(e))) if e.code == 404 => println!("no such user"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource service operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// A transport-level error, passed through unchanged.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request payload or query could not be serialized.
    #[error("Failed to encode {resource} request: {message}")]
    Encode {
        /// The resource the request was for.
        resource: String,
        /// The serializer's message.
        message: String,
    },

    /// The response body was not a valid envelope for the expected type.
    #[error("Failed to decode {resource} response: {message}")]
    Decode {
        /// The resource the response came from.
        resource: String,
        /// The deserializer's message.
        message: String,
    },
}

impl RestError {
    /// Returns the wrapped transport error, if this is one.
    #[must_use]
    pub const fn as_http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}
