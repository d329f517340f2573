//! HTTP client for console backend communication.
//!
//! This module provides the [`HttpClient`] type, the shared transport every
//! resource service and the session bootstrap go through.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::errors::{BusinessError, HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::{
    ErrorHandler, ErrorShowType, PageArgumentsInterceptor, RequestInterceptor,
    TracingErrorHandler,
};
use crate::config::{BaseUrl, ConsoleConfig};

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the console backend.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and Accept
/// - Cookie storage when credentials are included
/// - The request interceptor pipeline
/// - Rejection of envelopes that report `success: false`
/// - Reporting failures to the registered error handler
///
/// The client performs no retries; every failure is returned to the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use admin_console::{BaseUrl, ConsoleConfig, HttpClient, HttpMethod, HttpRequest};
///
/// let config = ConsoleConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8000")?)
///     .build()?;
///
/// let client = HttpClient::console(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/users")
///     .param("current", "1")
///     .build()?;
///
/// // Sent as GET /api/users?page=1
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL requests are resolved against.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Interceptors applied to every request, in order.
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
    /// Receives every failure not marked `skip_error_handler`.
    error_handler: Option<Arc<dyn ErrorHandler>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a builder for a client configured from `config`.
    #[must_use]
    pub fn builder(config: &ConsoleConfig) -> HttpClientBuilder {
        HttpClientBuilder::new(config)
    }

    /// Creates a bare client: no interceptors and no error handler.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &ConsoleConfig) -> Result<Self, HttpError> {
        Self::builder(config).build()
    }

    /// Creates the console's standard transport.
    ///
    /// The paging interceptor ([`PageArgumentsInterceptor`]) is installed and
    /// failures are reported through [`TracingErrorHandler`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created.
    pub fn console(config: &ConsoleConfig) -> Result<Self, HttpError> {
        Self::builder(config)
            .interceptor(PageArgumentsInterceptor)
            .error_handler(TracingErrorHandler)
            .build()
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the number of registered interceptors.
    #[must_use]
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Sends an HTTP request to the console backend.
    ///
    /// Interceptors run first, once each, in registration order. The request
    /// is then validated and sent. A non-2xx status becomes
    /// [`HttpError::Response`]; a 2xx JSON object with `"success": false`
    /// becomes [`HttpError::Business`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - The envelope reports failure (`Business`)
    pub async fn request(&self, mut request: HttpRequest) -> Result<HttpResponse, HttpError> {
        for interceptor in &self.interceptors {
            interceptor.intercept(&mut request);
        }

        let result = self.send(&request).await;

        if let Err(error) = &result {
            if !request.skip_error_handler {
                if let Some(handler) = &self.error_handler {
                    handler.handle(&request.path, error);
                }
            }
        }

        result
    }

    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let method = match request.http_method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let mut req_builder = self.client.request(method, &url);

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(params) = &request.params {
            req_builder = req_builder.query(params);
        }

        if let Some(body) = request.encoded_body()? {
            req_builder = req_builder.body(body);
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "sending request"
        );

        let res = req_builder.send().await?;

        let status = res.status();
        let code = status.as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body_text).unwrap_or(Value::String(body_text))
        };

        let response = HttpResponse::new(code, res_headers, body);

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "received response"
        );

        if !response.is_ok() {
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: Self::error_message(&response.body)
                    .unwrap_or_else(|| status.to_string()),
                error_reference: response.request_id().map(String::from),
            }));
        }

        if let Some(error) = Self::rejected_envelope(&response.body) {
            return Err(HttpError::Business(error));
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Picks the backend's error text out of an error body.
    fn error_message(body: &Value) -> Option<String> {
        match body {
            Value::Object(map) => ["errorMessage", "message", "error"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .map(String::from),
            Value::String(raw) if !raw.is_empty() => Some(raw.clone()),
            _ => None,
        }
    }

    /// Returns the business error of an envelope with `"success": false`.
    fn rejected_envelope(body: &Value) -> Option<BusinessError> {
        let map = body.as_object()?;
        if map.get("success").and_then(Value::as_bool) != Some(false) {
            return None;
        }

        let code = map.get("errorCode").and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        let message = map
            .get("errorMessage")
            .and_then(Value::as_str)
            .map(String::from);
        let show_type = map
            .get("showType")
            .and_then(Value::as_i64)
            .map_or_else(ErrorShowType::default, ErrorShowType::from_code);

        Some(BusinessError {
            code,
            message,
            show_type,
        })
    }
}

/// Builder for constructing [`HttpClient`] instances.
///
/// # Example
///
/// ```rust
/// use admin_console::{BaseUrl, ConsoleConfig, HttpClient};
/// use admin_console::clients::{PageArgumentsInterceptor, TracingErrorHandler};
///
/// let config = ConsoleConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8000").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::builder(&config)
///     .interceptor(PageArgumentsInterceptor)
///     .error_handler(TracingErrorHandler)
///     .build()
///     .unwrap();
///
/// assert_eq!(client.interceptor_count(), 1);
/// ```
#[derive(Debug)]
pub struct HttpClientBuilder {
    config: ConsoleConfig,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
    error_handler: Option<Arc<dyn ErrorHandler>>,
}

impl HttpClientBuilder {
    fn new(config: &ConsoleConfig) -> Self {
        Self {
            config: config.clone(),
            interceptors: Vec::new(),
            error_handler: None,
        }
    }

    /// Appends an interceptor to the pipeline.
    #[must_use]
    pub fn interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Sets the handler that receives failed requests.
    #[must_use]
    pub fn error_handler(mut self, handler: impl ErrorHandler + 'static) -> Self {
        self.error_handler = Some(Arc::new(handler));
        self
    }

    /// Builds the [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created.
    pub fn build(self) -> Result<HttpClient, HttpError> {
        let config = self.config;

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Admin Console Client v{CLIENT_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut client_builder = reqwest::Client::builder()
            .use_rustls_tls()
            .cookie_store(config.include_credentials());
        if let Some(timeout) = config.timeout() {
            client_builder = client_builder.timeout(timeout);
        }

        Ok(HttpClient {
            client: client_builder.build()?,
            base_url: config.base_url().clone(),
            default_headers,
            interceptors: self.interceptors,
            error_handler: self.error_handler,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_config() -> ConsoleConfig {
        ConsoleConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8000").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(client.base_url().as_ref(), "http://localhost:8000");
        assert_eq!(client.interceptor_count(), 0);
    }

    #[test]
    fn test_console_client_installs_paging_interceptor() {
        let client = HttpClient::console(&create_test_config()).unwrap();
        assert_eq!(client.interceptor_count(), 1);
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Admin Console Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ConsoleConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8000").unwrap())
            .user_agent_prefix("Ops/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Ops/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_error_message_prefers_error_message_field() {
        let body = json!({"errorMessage": "denied", "message": "other"});
        assert_eq!(HttpClient::error_message(&body), Some("denied".to_string()));

        let body = json!({"message": "fallback"});
        assert_eq!(HttpClient::error_message(&body), Some("fallback".to_string()));

        assert_eq!(HttpClient::error_message(&json!(null)), None);
        assert_eq!(
            HttpClient::error_message(&json!("Bad Gateway")),
            Some("Bad Gateway".to_string())
        );
    }

    #[test]
    fn test_rejected_envelope_detection() {
        assert!(HttpClient::rejected_envelope(&json!({"success": true, "data": 1})).is_none());
        assert!(HttpClient::rejected_envelope(&json!({"data": 1})).is_none());
        assert!(HttpClient::rejected_envelope(&json!([1, 2])).is_none());

        let error = HttpClient::rejected_envelope(&json!({
            "success": false,
            "errorCode": 1001,
            "errorMessage": "name taken",
            "showType": 1
        }))
        .unwrap();
        assert_eq!(error.code.as_deref(), Some("1001"));
        assert_eq!(error.message.as_deref(), Some("name taken"));
        assert_eq!(error.show_type, ErrorShowType::WarnMessage);
    }

    #[test]
    fn test_rejected_envelope_defaults_show_type() {
        let error = HttpClient::rejected_envelope(&json!({"success": false})).unwrap();
        assert_eq!(error.show_type, ErrorShowType::ErrorMessage);
        assert!(error.code.is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
