//! Configuration types for the SWAPI client.
//!
//! This module provides the core configuration types used to initialize the
//! client for API communication with SWAPI.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SwapiConfig`]: The main configuration struct holding all client settings
//! - [`SwapiConfigBuilder`]: A builder for constructing [`SwapiConfig`] instances
//! - [`ApiBaseUrl`]: A validated API base URL newtype
//!
//! The public SWAPI endpoint is the default; the base URL is configurable so
//! tests and mirrors can point the client elsewhere.
//!
//! # Example
//!
//! ```rust
//! use starwars_api::{ApiBaseUrl, SwapiConfig};
//!
//! let config = SwapiConfig::builder()
//!     .base_url(ApiBaseUrl::new("https://swapi.dev/api").unwrap())
//!     .user_agent_prefix("my-app")
//!     .build();
//!
//! assert_eq!(config.base_url().as_ref(), "https://swapi.dev/api");
//! ```

mod newtypes;

pub use newtypes::ApiBaseUrl;

/// The public SWAPI endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Configuration for the SWAPI client.
///
/// This struct holds all configuration needed for client operations: the API
/// base URL and an optional User-Agent prefix.
///
/// # Thread Safety
///
/// `SwapiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use starwars_api::SwapiConfig;
///
/// let config = SwapiConfig::default();
/// assert_eq!(config.base_url().as_ref(), "https://swapi.dev/api");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapiConfig {
    base_url: ApiBaseUrl,
    user_agent_prefix: Option<String>,
}

impl SwapiConfig {
    /// Creates a new builder for constructing a `SwapiConfig`.
    #[must_use]
    pub fn builder() -> SwapiConfigBuilder {
        SwapiConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for SwapiConfig {
    /// Returns a configuration pointing at the public SWAPI endpoint.
    fn default() -> Self {
        Self {
            base_url: ApiBaseUrl::new(DEFAULT_BASE_URL).expect("default base URL is valid"),
            user_agent_prefix: None,
        }
    }
}

/// Builder for [`SwapiConfig`].
///
/// All fields are optional; unset fields fall back to their defaults.
///
/// # Example
///
/// ```rust
/// use starwars_api::{ApiBaseUrl, SwapiConfig};
///
/// let config = SwapiConfig::builder()
///     .base_url(ApiBaseUrl::new("http://localhost:8080/api").unwrap())
///     .build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct SwapiConfigBuilder {
    base_url: Option<ApiBaseUrl>,
    user_agent_prefix: Option<String>,
}

impl SwapiConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: ApiBaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration, applying defaults for unset fields.
    #[must_use]
    pub fn build(self) -> SwapiConfig {
        let defaults = SwapiConfig::default();
        SwapiConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
