//! HTTP transport for the console backend.
//!
//! This module provides the client layer every resource service goes
//! through: request/response types, the interceptor pipeline, and the
//! global error-handling policy.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client, built with [`HttpClientBuilder`]
//! - [`HttpRequest`]: A request to be sent to the backend
//! - [`HttpResponse`]: A parsed response from the backend
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies (JSON, form)
//! - [`RequestInterceptor`] / [`PageArgumentsInterceptor`]: Request rewriting
//! - [`ErrorHandler`] / [`TracingErrorHandler`] / [`ErrorShowType`]: Error display policy
//!
//! # Example
//!
//! ```rust,ignore
//! use admin_console::{BaseUrl, ConsoleConfig};
//! use admin_console::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = ConsoleConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8000")?)
//!     .build()?;
//! let client = HttpClient::console(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/api/roles").build()?;
//! let response = client.request(request).await?;
//! ```

mod error_handler;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod interceptor;

pub use error_handler::{ErrorHandler, ErrorShowType, TracingErrorHandler};
pub use errors::{BusinessError, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, HttpClientBuilder, CLIENT_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use interceptor::{PageArgumentsInterceptor, RequestInterceptor};
