//! HTTP client types for API communication.
//!
//! This module provides the HTTP layer for making requests to SWAPI. It
//! handles request dispatch, response decoding, and error surfacing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpError`]: Unified error type for HTTP failures
//! - [`swapi::SwapiClient`]: Higher-level SWAPI client
//! - [`swapi::ClientError`]: SWAPI-specific error type
//!
//! # Example
//!
//! ```rust,ignore
//! use starwars_api::clients::HttpClient;
//!
//! let client = HttpClient::new(None);
//! let response = client.get("people/", None).await?;
//! if response.is_ok() {
//!     println!("People: {}", response.body);
//! }
//! ```
//!
//! # Failure Behavior
//!
//! The client performs a single dispatch per call: no retries, no backoff.
//! Transport failures and malformed success bodies are errors; non-2xx
//! status codes are returned as responses and mapped to errors by the
//! [`swapi`] layer.

mod errors;
mod http_client;
mod http_response;

pub mod swapi;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, LIB_VERSION};
pub use http_response::HttpResponse;

// Re-export SWAPI client types at the clients module level
pub use swapi::{ClientError, Page, ResourceKind, SwapiClient};
