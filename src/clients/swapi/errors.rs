//! Error types for the SWAPI client.

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for SWAPI client operations.
///
/// Every failure of the client surfaces through this single error kind:
/// transport failures, non-success status codes, and payloads that do not
/// match the expected SWAPI shape. The client performs no recovery; errors
/// propagate unchanged to the caller.
///
/// # Example
///
/// ```rust,ignore
/// use starwars_api::{ClientError, ResourceKind, SwapiClient};
///
/// let client = SwapiClient::new();
/// match client.fetch_page(ResourceKind::People, 1).await {
///     Ok(page) => println!("{} people total", page.count),
///     Err(ClientError::Http(e)) => println!("request failed: {e}"),
///     Err(ClientError::UnexpectedPayload { resource, message }) => {
///         println!("bad {resource} payload: {message}");
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ClientError {
    /// An HTTP-level error occurred (network failure or non-2xx status).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body did not match the expected SWAPI payload shape.
    #[error("Unexpected {resource} payload: {message}")]
    UnexpectedPayload {
        /// The resource being fetched when decoding failed.
        resource: &'static str,
        /// Description of the decode failure.
        message: String,
    },
}

impl ClientError {
    /// Returns the HTTP status code associated with this error, if any.
    ///
    /// Useful for mapping specific status codes (e.g., 404) to semantic
    /// errors at higher layers.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::UnexpectedPayload { .. } => None,
        }
    }
}

// Verify ClientError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientError>();
};
