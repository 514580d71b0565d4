//! HTTP client for API communication.
//!
//! This module provides the [`HttpClient`] type for making GET requests to
//! the API and decoding responses into [`HttpResponse`].

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::SwapiConfig;

/// Library version from Cargo.toml.
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the API.
///
/// The client handles:
/// - Base URI construction from the configured base URL
/// - Default headers including User-Agent and Accept
/// - Decoding response bodies as JSON
///
/// SWAPI is a read-only service, so the client only exposes GET. Response
/// status codes are not interpreted here; callers inspect
/// [`HttpResponse::is_ok`] and decide how to surface failures.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use starwars_api::clients::HttpClient;
/// use starwars_api::SwapiConfig;
///
/// let client = HttpClient::new(Some(&SwapiConfig::default()));
///
/// let mut query = std::collections::HashMap::new();
/// query.insert("page".to_string(), "1".to_string());
/// let response = client.get("people/", Some(&query)).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://swapi.dev/api`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - Optional configuration for base URL and User-Agent prefix
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: Option<&SwapiConfig>) -> Self {
        let defaults = SwapiConfig::default();
        let config = config.unwrap_or(&defaults);

        let base_uri = config.base_url().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Star Wars API Library v{LIB_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to the given path.
    ///
    /// The path is joined to the base URI with a single `/`. The response
    /// body is decoded as JSON; an empty body decodes to `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request cannot be dispatched.
    /// Returns [`HttpError::Malformed`] if a successful response carries a
    /// body that is not valid JSON. Non-2xx responses are NOT errors at this
    /// layer; the caller inspects [`HttpResponse::is_ok`].
    pub async fn get(
        &self,
        path: &str,
        query: Option<&HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let url = format!("{}/{}", self.base_uri, path.trim_start_matches('/'));

        tracing::debug!(url = %url, "dispatching GET request");

        let mut req_builder = self.client.get(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(query) = query {
            req_builder = req_builder.query(query);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            match serde_json::from_str(&body_text) {
                Ok(value) => value,
                // A broken body on a success response is a client-visible
                // failure; on an error response, keep the raw text so the
                // caller can fold it into its error message.
                Err(e) if (200..300).contains(&code) => {
                    return Err(HttpError::Malformed {
                        message: e.to_string(),
                    });
                }
                Err(_) => serde_json::json!({ "raw_body": body_text }),
            }
        };

        if code >= 400 {
            tracing::warn!(url = %url, code, "request returned error status");
        }

        Ok(HttpResponse::new(code, headers, body))
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
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(None)
    }
}
