//! Configuration types for the console client.
//!
//! This module provides the configuration used to construct the shared
//! transport and the session bootstrap.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ConsoleConfig`]: The configuration struct holding all client settings
//! - [`ConsoleConfigBuilder`]: A builder for constructing [`ConsoleConfig`] instances
//! - [`BaseUrl`]: A validated backend base URL
//! - [`ResourceName`]: A validated REST collection name
//!
//! # Example
//!
//! ```rust
//! use admin_console::{BaseUrl, ConsoleConfig};
//!
//! let config = ConsoleConfig::builder()
//!     .base_url(BaseUrl::new("https://console.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.login_path(), "/user/login");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, ResourceName};

use std::time::Duration;

use crate::error::ConfigError;

/// Default route of the login page.
pub const DEFAULT_LOGIN_PATH: &str = "/user/login";

/// Default endpoint returning the signed-in user.
pub const DEFAULT_CURRENT_USER_PATH: &str = "/api/currentUser";

/// Default endpoint returning the signed-in user's menu tree.
pub const DEFAULT_MENU_PATH: &str = "/api/menus";

/// Configuration for the console client.
///
/// # Thread Safety
///
/// `ConsoleConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use admin_console::{BaseUrl, ConsoleConfig};
///
/// let config = ConsoleConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8000").unwrap())
///     .timeout(Duration::from_secs(10))
///     .include_credentials(false)
///     .build()
///     .unwrap();
///
/// assert!(!config.include_credentials());
/// ```
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    include_credentials: bool,
    login_path: String,
    current_user_path: String,
    menu_path: String,
}

impl ConsoleConfig {
    /// Creates a new builder for constructing a `ConsoleConfig`.
    #[must_use]
    pub fn builder() -> ConsoleConfigBuilder {
        ConsoleConfigBuilder::new()
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns whether cookies are stored and sent with every request.
    #[must_use]
    pub const fn include_credentials(&self) -> bool {
        self.include_credentials
    }

    /// Returns the route of the login page.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Returns the endpoint returning the signed-in user.
    #[must_use]
    pub fn current_user_path(&self) -> &str {
        &self.current_user_path
    }

    /// Returns the endpoint returning the signed-in user's menu tree.
    #[must_use]
    pub fn menu_path(&self) -> &str {
        &self.menu_path
    }
}

// Verify ConsoleConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConsoleConfig>();
};

/// Builder for constructing [`ConsoleConfig`] instances.
///
/// `base_url` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `include_credentials`: `true`
/// - `timeout`: `None` (transport default)
/// - `login_path`: [`DEFAULT_LOGIN_PATH`]
/// - `current_user_path`: [`DEFAULT_CURRENT_USER_PATH`]
/// - `menu_path`: [`DEFAULT_MENU_PATH`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ConsoleConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    include_credentials: Option<bool>,
    login_path: Option<String>,
    current_user_path: Option<String>,
    menu_path: Option<String>,
}

impl ConsoleConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets whether cookies are kept between requests.
    #[must_use]
    pub const fn include_credentials(mut self, include: bool) -> Self {
        self.include_credentials = Some(include);
        self
    }

    /// Sets the route of the login page.
    #[must_use]
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    /// Sets the endpoint returning the signed-in user.
    #[must_use]
    pub fn current_user_path(mut self, path: impl Into<String>) -> Self {
        self.current_user_path = Some(path.into());
        self
    }

    /// Sets the endpoint returning the signed-in user's menu tree.
    #[must_use]
    pub fn menu_path(mut self, path: impl Into<String>) -> Self {
        self.menu_path = Some(path.into());
        self
    }

    /// Builds the [`ConsoleConfig`], validating its fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set,
    /// or [`ConfigError::InvalidPath`] if a route does not start with `/`.
    pub fn build(self) -> Result<ConsoleConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        let login_path = validate_path("login_path", self.login_path, DEFAULT_LOGIN_PATH)?;
        let current_user_path = validate_path(
            "current_user_path",
            self.current_user_path,
            DEFAULT_CURRENT_USER_PATH,
        )?;
        let menu_path = validate_path("menu_path", self.menu_path, DEFAULT_MENU_PATH)?;

        Ok(ConsoleConfig {
            base_url,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            include_credentials: self.include_credentials.unwrap_or(true),
            login_path,
            current_user_path,
            menu_path,
        })
    }
}

fn validate_path(
    field: &'static str,
    path: Option<String>,
    default: &str,
) -> Result<String, ConfigError> {
    let path = path.unwrap_or_else(|| default.to_string());
    if !path.starts_with('/') {
        return Err(ConfigError::InvalidPath { field, path });
    }
    Ok(path)
}
