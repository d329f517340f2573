//! Global error handling policy.
//!
//! The console surfaces failed requests uniformly: the backend's envelope
//! says how (`showType`), and a single handler registered on the
//! [`HttpClient`](crate::clients::HttpClient) receives every failure. The
//! handler only observes; the error still reaches the caller unchanged.
//! Requests built with `skip_error_handler(true)` bypass it.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::clients::HttpError;

/// How an error should be surfaced to the user.
///
/// Encoded on the wire as an integer. Unknown codes fall back to
/// [`ErrorShowType::ErrorMessage`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorShowType {
    /// Do not show anything.
    Silent,
    /// Show a warning toast.
    WarnMessage,
    /// Show an error toast.
    #[default]
    ErrorMessage,
    /// Show a notification with the error code.
    Notification,
    /// Send the user elsewhere (usually the login page).
    Redirect,
}

impl ErrorShowType {
    /// Maps a wire code to a show type.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Silent,
            1 => Self::WarnMessage,
            3 => Self::Notification,
            9 => Self::Redirect,
            _ => Self::ErrorMessage,
        }
    }

    /// Returns the wire code of this show type.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Silent => 0,
            Self::WarnMessage => 1,
            Self::ErrorMessage => 2,
            Self::Notification => 3,
            Self::Redirect => 9,
        }
    }
}

impl Serialize for ErrorShowType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for ErrorShowType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Ok(Self::from_code(code))
    }
}

/// Receives every failed request of a client.
pub trait ErrorHandler: fmt::Debug + Send + Sync {
    /// Called once per failed request, before the error is returned.
    fn handle(&self, path: &str, error: &HttpError);
}

/// Reports failures through `tracing`.
///
/// Business errors are logged at the level their show type asks for
/// (silent at debug, warnings at warn, everything else at error). Transport
/// errors are always logged at error.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingErrorHandler;

impl ErrorHandler for TracingErrorHandler {
    fn handle(&self, path: &str, error: &HttpError) {
        match error {
            HttpError::Business(e) => match e.show_type {
                ErrorShowType::Silent => {
                    tracing::debug!(path, code = ?e.code, "{}", e);
                }
                ErrorShowType::WarnMessage => {
                    tracing::warn!(path, code = ?e.code, "{}", e);
                }
                ErrorShowType::Redirect => {
                    tracing::error!(path, code = ?e.code, redirect = true, "{}", e);
                }
                ErrorShowType::ErrorMessage | ErrorShowType::Notification => {
                    tracing::error!(path, code = ?e.code, "{}", e);
                }
            },
            HttpError::Response(e) => {
                tracing::error!(
                    path,
                    status = e.code,
                    reference = ?e.error_reference,
                    "{}",
                    e.message
                );
            }
            other => tracing::error!(path, "{}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_type_codes_round_trip() {
        for show_type in [
            ErrorShowType::Silent,
            ErrorShowType::WarnMessage,
            ErrorShowType::ErrorMessage,
            ErrorShowType::Notification,
            ErrorShowType::Redirect,
        ] {
            assert_eq!(ErrorShowType::from_code(show_type.code()), show_type);
        }
    }

    #[test]
    fn test_unknown_show_type_falls_back_to_error_message() {
        assert_eq!(ErrorShowType::from_code(4), ErrorShowType::ErrorMessage);
        assert_eq!(ErrorShowType::from_code(-1), ErrorShowType::ErrorMessage);

        let parsed: ErrorShowType = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, ErrorShowType::ErrorMessage);
    }

    #[test]
    fn test_show_type_serializes_as_integer() {
        assert_eq!(
            serde_json::to_string(&ErrorShowType::Redirect).unwrap(),
            "9"
        );
    }

    #[test]
    fn test_tracing_handler_accepts_every_variant() {
        use crate::clients::{BusinessError, HttpResponseError, InvalidHttpRequestError};

        let handler = TracingErrorHandler;
        handler.handle(
            "/api/users",
            &HttpError::Business(BusinessError {
                code: None,
                message: Some("quiet".to_string()),
                show_type: ErrorShowType::Silent,
            }),
        );
        handler.handle(
            "/api/users",
            &HttpError::Response(HttpResponseError {
                code: 500,
                message: "boom".to_string(),
                error_reference: None,
            }),
        );
        handler.handle(
            "/api/users",
            &HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType),
        );
    }
}
