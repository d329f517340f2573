//! Error types for client configuration.
//!
//! This module contains the error type raised while building configuration
//! values and validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use admin_console::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant names the offending value and what was expected instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http(s) URL with a host (e.g., 'https://console.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Resource name is invalid.
    #[error("Invalid resource name '{name}'. Expected a non-empty collection name without whitespace, '?' or '#', and without leading or trailing '/'.")]
    InvalidResourceName {
        /// The invalid name that was provided.
        name: String,
    },

    /// A console route path is invalid.
    #[error("Invalid path '{path}' for {field}. Paths must start with '/'.")]
    InvalidPath {
        /// The configuration field the path was given for.
        field: &'static str,
        /// The invalid path that was provided.
        path: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
