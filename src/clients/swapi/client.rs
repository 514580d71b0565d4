//! SWAPI client implementation.
//!
//! This module provides the [`SwapiClient`] type, the collaborator that
//! performs the actual API requests: one page of a resource listing, or a
//! single record by identifier.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::swapi::{ClientError, Page, ResourceKind};
use crate::clients::{HttpClient, HttpResponse};
use crate::config::SwapiConfig;

/// Client for the Star Wars API.
///
/// Wraps [`HttpClient`] with SWAPI path conventions and payload decoding.
/// The client is explicitly constructed and passed by reference into query
/// sets and model factories, so callers can point it at a test double via
/// [`SwapiConfig`].
///
/// # Thread Safety
///
/// `SwapiClient` is `Send + Sync`, making it safe to share across async
/// tasks. It holds no mutable state; pagination cursors live in the query
/// sets that borrow it.
///
/// # Example
///
/// ```rust,ignore
/// use starwars_api::{ResourceKind, SwapiClient};
///
/// let client = SwapiClient::new();
///
/// let page = client.fetch_page(ResourceKind::People, 1).await?;
/// println!("{} people across all pages", page.count);
///
/// let luke = client.fetch_by_id(ResourceKind::People, 1).await?;
/// println!("{:?}", luke.get("name"));
/// ```
#[derive(Debug)]
pub struct SwapiClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify SwapiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SwapiClient>();
};

impl SwapiClient {
    /// Creates a client pointing at the public SWAPI endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(None),
        }
    }

    /// Creates a client with the given configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use starwars_api::{ApiBaseUrl, SwapiConfig, SwapiClient};
    ///
    /// let config = SwapiConfig::builder()
    ///     .base_url(ApiBaseUrl::new("http://localhost:8080/api").unwrap())
    ///     .build();
    /// let client = SwapiClient::with_config(&config);
    /// ```
    #[must_use]
    pub fn with_config(config: &SwapiConfig) -> Self {
        Self {
            http_client: HttpClient::new(Some(config)),
        }
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Fetches one page of a resource listing.
    ///
    /// Pages are 1-based. Requesting a page past the end of the collection
    /// is a server-side error (SWAPI answers 404) and surfaces as
    /// [`ClientError::Http`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] for transport failures and non-2xx
    /// responses, and [`ClientError::UnexpectedPayload`] when the body does
    /// not decode as a listing page.
    pub async fn fetch_page(
        &self,
        kind: ResourceKind,
        page: u32,
    ) -> Result<Page, ClientError> {
        let path = normalize_path(kind.as_str());

        let mut query = HashMap::new();
        query.insert("page".to_string(), page.to_string());

        tracing::debug!(resource = %kind, page, "fetching listing page");

        let response = self.http_client.get(&path, Some(&query)).await?;
        let response = check_status(response)?;

        serde_json::from_value(response.body).map_err(|e| ClientError::UnexpectedPayload {
            resource: kind.as_str(),
            message: e.to_string(),
        })
    }

    /// Fetches a single record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] for transport failures and non-2xx
    /// responses (404 for an unknown id), and
    /// [`ClientError::UnexpectedPayload`] when the body is not a JSON
    /// object.
    pub async fn fetch_by_id(
        &self,
        kind: ResourceKind,
        id: u64,
    ) -> Result<Map<String, Value>, ClientError> {
        let path = normalize_path(&format!("{}/{id}", kind.as_str()));

        tracing::debug!(resource = %kind, id, "fetching record by id");

        let response = self.http_client.get(&path, None).await?;
        let response = check_status(response)?;

        match response.body {
            Value::Object(fields) => Ok(fields),
            other => Err(ClientError::UnexpectedPayload {
                resource: kind.as_str(),
                message: format!("expected a JSON object, got {other}"),
            }),
        }
    }
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a non-2xx response to an error, passing successes through.
fn check_status(response: HttpResponse) -> Result<HttpResponse, ClientError> {
    if response.is_ok() {
        return Ok(response);
    }
    Err(ClientError::Http(HttpError::Response(HttpResponseError {
        code: response.code,
        message: serialize_error(&response),
    })))
}

/// Normalizes a SWAPI path to the trailing-slash convention.
///
/// SWAPI routes end in `/` (`people/`, `people/1/`); requests without the
/// trailing slash are redirected. Leading slashes are stripped so the path
/// joins cleanly onto the base URI.
fn normalize_path(path: &str) -> String {
    let path = path.trim_start_matches('/').trim_end_matches('/');
    format!("{path}/")
}

/// Serializes an error response body into a message string.
///
/// SWAPI reports failures as `{"detail": "..."}`. That field is preserved
/// when present; otherwise the whole body is serialized as-is.
fn serialize_error(response: &HttpResponse) -> String {
    let mut error_body = serde_json::Map::new();

    if let Some(detail) = response.body.get("detail") {
        error_body.insert("detail".to_string(), detail.clone());
    }

    if error_body.is_empty() {
        response.body.to_string()
    } else {
        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
