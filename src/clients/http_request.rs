//! HTTP request types for the console client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the console backend.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the console backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for partial updates, reordering and toggles.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// URL-encoded form content type (`application/x-www-form-urlencoded`).
    Form,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Form => "application/x-www-form-urlencoded",
        }
    }
}

/// An HTTP request to be sent to the console backend.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use admin_console::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let list = HttpRequest::builder(HttpMethod::Get, "/api/users")
///     .param("current", "2")
///     .build()
///     .unwrap();
///
/// let toggle = HttpRequest::builder(HttpMethod::Patch, "/api/users/5/yn")
///     .body(json!({"yn": 1}))
///     .body_type(DataType::Form)
///     .build()
///     .unwrap();
/// assert_eq!(toggle.encoded_body().unwrap().as_deref(), Some("yn=1"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute path (e.g. `/api/users/5`) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters to append to the URL.
    pub params: Option<BTreeMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// When set, failures of this request bypass the client's error handler.
    pub skip_error_handler: bool,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` does not start with `/`
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Post` or `Patch` but `body` is `None`
    /// - a form body is not a flat object of scalars
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.path.starts_with('/') {
            return Err(InvalidHttpRequestError::RelativePath {
                path: self.path.clone(),
            });
        }

        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Patch) && self.body.is_none()
        {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        self.encoded_body().map(|_| ())
    }

    /// Returns the body as it goes on the wire.
    ///
    /// JSON bodies are serialized as-is. Form bodies are encoded as
    /// `key=value` pairs joined by `&`, with both sides percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidFormBody`] if a form body is
    /// not a flat object of scalar values.
    pub fn encoded_body(&self) -> Result<Option<String>, InvalidHttpRequestError> {
        let Some(body) = &self.body else {
            return Ok(None);
        };

        match self.body_type {
            Some(DataType::Form) => encode_form(body).map(Some),
            _ => Ok(Some(body.to_string())),
        }
    }
}

fn encode_form(body: &Value) -> Result<String, InvalidHttpRequestError> {
    let Value::Object(map) = body else {
        return Err(InvalidHttpRequestError::InvalidFormBody {
            field: "<root>".to_string(),
        });
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(InvalidHttpRequestError::InvalidFormBody { field: key.clone() })
            }
        };
        pairs.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(&value)
        ));
    }

    Ok(pairs.join("&"))
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<Value>,
    body_type: Option<DataType>,
    params: Option<BTreeMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    skip_error_handler: bool,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            params: None,
            extra_headers: None,
            skip_error_handler: false,
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn params(mut self, params: BTreeMap<String, String>) -> Self {
        self.params = Some(params);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Keeps failures of this request away from the client's error handler.
    #[must_use]
    pub const fn skip_error_handler(mut self, skip: bool) -> Self {
        self.skip_error_handler = skip;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            params: self.params,
            extra_headers: self.extra_headers,
            skip_error_handler: self.skip_error_handler,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
        assert_eq!(
            DataType::Form.as_content_type(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/api/users")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/api/users");
        assert!(request.body.is_none());
        assert!(request.params.is_none());
        assert!(!request.skip_error_handler);
    }

    #[test]
    fn test_verify_requires_body_for_post_and_patch() {
        for method in [HttpMethod::Post, HttpMethod::Patch] {
            let result = HttpRequest::builder(method, "/api/users").build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::MissingBody { .. })
            ));
        }
    }

    #[test]
    fn test_delete_does_not_require_body() {
        assert!(HttpRequest::builder(HttpMethod::Delete, "/api/users/1")
            .build()
            .is_ok());
    }

    #[test]
    fn test_verify_requires_absolute_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "api/users").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::RelativePath { path }) if path == "api/users"
        ));
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let result = HttpRequest::builder(HttpMethod::Post, "/api/users")
            .body(json!({"name": "a"}))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_json_body_is_serialized() {
        let request = HttpRequest::builder(HttpMethod::Post, "/api/users")
            .body(json!({"name": "alice"}))
            .body_type(DataType::Json)
            .build()
            .unwrap();

        assert_eq!(
            request.encoded_body().unwrap().as_deref(),
            Some(r#"{"name":"alice"}"#)
        );
    }

    #[test]
    fn test_form_body_is_url_encoded() {
        let request = HttpRequest::builder(HttpMethod::Patch, "/api/users/5/yn")
            .body(json!({"yn": 0, "note": "a b&c"}))
            .body_type(DataType::Form)
            .build()
            .unwrap();

        assert_eq!(
            request.encoded_body().unwrap().as_deref(),
            Some("note=a%20b%26c&yn=0")
        );
    }

    #[test]
    fn test_form_body_rejects_nested_values() {
        let result = HttpRequest::builder(HttpMethod::Patch, "/api/users/5/yn")
            .body(json!({"tags": ["a"]}))
            .body_type(DataType::Form)
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidFormBody { field }) if field == "tags"
        ));
    }

    #[test]
    fn test_builder_with_params_and_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "/api/users")
            .param("current", "1")
            .param("pageSize", "20")
            .header("X-Trace", "t-1")
            .skip_error_handler(true)
            .build()
            .unwrap();

        let params = request.params.unwrap();
        assert_eq!(params.get("current"), Some(&"1".to_string()));
        assert_eq!(params.get("pageSize"), Some(&"20".to_string()));
        assert_eq!(
            request.extra_headers.unwrap().get("X-Trace"),
            Some(&"t-1".to_string())
        );
        assert!(request.skip_error_handler);
    }
}
