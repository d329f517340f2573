//! # Admin Console Client
//!
//! A Rust client for admin console backends that expose their collections
//! as uniform REST resources under `/api/{resource}`.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ConsoleConfig`] and [`ConsoleConfigBuilder`]
//! - Validated newtypes for the backend URL and resource names
//! - An async HTTP transport with a request interceptor pipeline and a
//!   pluggable error handler
//! - Paging parameter translation (`current`/`pageSize` to `page`/`size`)
//! - A generic resource client, [`DomainService`], for list, find, create,
//!   update, delete, reorder and enable/disable calls
//! - Session bootstrap for the console shell: current user, menu tree and
//!   login redirect
//!
//! ## Quick Start
//!
//! ```rust
//! use admin_console::{BaseUrl, ConsoleConfig};
//!
//! let config = ConsoleConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8000").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.login_path(), "/user/login");
//! ```
//!
//! ## Resource Services
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use admin_console::{DomainService, HttpClient, ResourceName};
//! use admin_console::rest::{PageQuery, SortDescriptor};
//!
//! let client = Arc::new(HttpClient::console(&config)?);
//! let users: DomainService<User> = DomainService::new(Arc::clone(&client), ResourceName::new("users")?);
//!
//! // GET /api/users?page=1&size=10&orders=createdAt%20desc
//! let mut query = PageQuery::new().current(1).page_size(10);
//! let page = users.list(&mut query, Some(&SortDescriptor::descend("createdAt"))).await?;
//!
//! // POST /api/users
//! let id = users.create(&new_user).await?.into_data();
//!
//! // PATCH /api/users/sort, sortValue rewritten to 1..n first
//! users.sort(&mut rows).await?;
//! ```
//!
//! ## Session Bootstrap
//!
//! ```rust,ignore
//! use admin_console::session::bootstrap;
//!
//! let state = bootstrap(&client, &config, "/dashboard").await;
//! if let Some(login) = &state.redirect {
//!     // send the user to the login page
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Interceptors and the error handler are registered
//!   on a client instance
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients and services are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Every failure is returned to the caller

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod session;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, ConsoleConfig, ConsoleConfigBuilder, ResourceName};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    BusinessError, DataType, ErrorShowType, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError,
};

// Re-export resource types
pub use rest::{DomainService, Entity, Envelope, PageQuery, Query, RestError};
