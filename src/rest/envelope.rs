//! The response envelope every console endpoint returns.
//!
//! ```json
//! {
//!   "success": true,
//!   "data": [ ... ],
//!   "total": 42,
//!   "errorCode": null,
//!   "errorMessage": null,
//!   "showType": null
//! }
//! ```
//!
//! `data` holds a single entity, a list of entities, an identifier or an
//! affected-row count depending on the endpoint. List responses may add the
//! paging fields `total`, `current` and `pageSize`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::clients::{BusinessError, ErrorShowType};

/// A response envelope carrying a payload plus success metadata.
///
/// # Example
///
/// ```rust
/// use admin_console::rest::Envelope;
///
/// let envelope: Envelope<Vec<u32>> =
///     serde_json::from_str(r#"{"success":true,"data":[1,2],"total":2}"#).unwrap();
///
/// assert!(envelope.success);
/// assert_eq!(envelope.total, Some(2));
/// assert_eq!(envelope.into_data(), Some(vec![1, 2]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Whether the backend accepted the request. Absent means accepted.
    #[serde(default = "accepted")]
    pub success: bool,
    /// The payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Total number of records, for paged lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Page number the list was cut from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,
    /// Page size the list was cut with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    /// Backend error code, numeric codes are kept as their decimal text.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_code: Option<String>,
    /// Backend error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// How an error should be surfaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_type: Option<ErrorShowType>,
}

/// Acknowledgement of a fire-and-forget call; the payload is whatever the
/// backend chose to send back.
pub type Acknowledgement = Envelope<Value>;

const fn accepted() -> bool {
    true
}

/// Reads an optional identifier that may arrive as a string or a number.
pub(crate) fn string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl<T> Envelope<T> {
    /// Creates a successful envelope around `data`.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            total: None,
            current: None,
            page_size: None,
            error_code: None,
            error_message: None,
            show_type: None,
        }
    }

    /// Creates a successful envelope without payload.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            success: true,
            data: None,
            total: None,
            current: None,
            page_size: None,
            error_code: None,
            error_message: None,
            show_type: None,
        }
    }

    /// Returns a reference to the payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the envelope and returns the payload, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Returns the envelope unchanged if it reports success.
    ///
    /// # Errors
    ///
    /// Returns a [`BusinessError`] carrying the envelope's error fields when
    /// `success` is `false`.
    pub fn ensure_success(self) -> Result<Self, BusinessError> {
        if self.success {
            return Ok(self);
        }
        Err(BusinessError {
            code: self.error_code,
            message: self.error_message,
            show_type: self.show_type.unwrap_or_default(),
        })
    }

    /// Maps the payload, keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            data: self.data.map(f),
            total: self.total,
            current: self.current,
            page_size: self.page_size,
            error_code: self.error_code,
            error_message: self.error_message,
            show_type: self.show_type,
        }
    }
}
