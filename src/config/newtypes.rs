//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated base URL of the console backend.
///
/// The URL must use the `http` or `https` scheme and name a host. A trailing
/// `/` is stripped so request paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use admin_console::BaseUrl;
///
/// let url = BaseUrl::new("https://console.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://console.example.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "console.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        if remainder.contains(['?', '#']) || remainder.contains(char::is_whitespace) {
            return Err(invalid());
        }

        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }

    /// Joins an absolute request path (starting with `/`) onto this URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated name of a REST collection on the console backend.
///
/// Requests for a resource are issued under `/api/{name}`. The name may
/// contain inner `/` segments (e.g. `system/users`) but no surrounding
/// slashes, whitespace, `?` or `#`.
///
/// # Serialization
///
/// `ResourceName` serializes to and deserializes from the plain name:
///
/// ```rust
/// use admin_console::ResourceName;
///
/// let name = ResourceName::new("users").unwrap();
/// assert_eq!(serde_json::to_string(&name).unwrap(), r#""users""#);
/// assert_eq!(name.base_path(), "/api/users");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Creates a new validated resource name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidResourceName`] if the name is invalid.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let valid = !name.is_empty()
            && !name.starts_with('/')
            && !name.ends_with('/')
            && !name.contains("//")
            && !name.contains(|c: char| c.is_whitespace() || c == '?' || c == '#');

        if !valid {
            return Err(ConfigError::InvalidResourceName { name });
        }
        Ok(Self(name))
    }

    /// Returns the collection path `/api/{name}`.
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/api/{}", self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ResourceName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ResourceName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
