//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use std::fmt;

use crate::error::ConfigError;

/// A validated API base URL.
///
/// This newtype ensures the base URL carries an `http://` or `https://`
/// scheme and normalizes away any trailing slash, so request paths can be
/// joined with a single separator.
///
/// # Example
///
/// ```rust
/// use starwars_api::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("https://swapi.dev/api/").unwrap();
/// assert_eq!(url.as_ref(), "https://swapi.dev/api");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// Creates a new validated base URL.
    ///
    /// Trailing slashes are stripped so that paths can be appended uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty or does
    /// not start with `http://` or `https://`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        if !trimmed.starts_with("https://") && !trimmed.starts_with("http://") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        // Reject scheme-only values like "https://".
        let rest = trimmed
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        if rest.trim_matches('/').is_empty() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(trimmed.trim_end_matches('/').to_string()))
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
