//! Resource-specific error types.
//!
//! This module contains error types for resource operations, extending the
//! client-level [`ClientError`](crate::clients::ClientError) with resource
//! semantics like `NotFound` and field-access failures.
//!
//! # Error Handling
//!
//! - **404 on `get(id)`**: [`ResourceError::NotFound`] — the record doesn't exist
//! - **Absent field**: [`ResourceError::MissingField`] — raised at access time,
//!   never at construction time (records carry no schema)
//! - **Wrong-shaped field**: [`ResourceError::UnexpectedType`] — a typed
//!   accessor found the field but couldn't read it as the expected type
//! - **Everything else**: [`ResourceError::Client`] — the client's failure,
//!   propagated unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use starwars_api::{People, Resource, ResourceError};
//!
//! match People::get(&client, 9999).await {
//!     Ok(person) => println!("{person}"),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("no {resource} record with id {id}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::ClientError;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use starwars_api::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "people",
///     id: 9999,
/// };
/// assert!(error.to_string().contains("people"));
/// assert!(error.to_string().contains("9999"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The record was not found (HTTP 404 on a single-record fetch).
    #[error("no {resource} record with id {id}")]
    NotFound {
        /// The resource name (e.g., "people", "films").
        resource: &'static str,
        /// The identifier that was requested.
        id: u64,
    },

    /// A record has no field with the given name.
    ///
    /// Raised when an accessor is called, not when the record is built.
    #[error("record has no field '{field}'")]
    MissingField {
        /// The name of the absent field.
        field: String,
    },

    /// A field exists but does not have the expected shape.
    #[error("field '{field}' is not {expected}")]
    UnexpectedType {
        /// The name of the field.
        field: String,
        /// Description of the expected shape (e.g., "a string").
        expected: &'static str,
    },

    /// A client-level error occurred.
    ///
    /// Wraps [`ClientError`] unchanged; the resource layer performs no
    /// recovery.
    #[error(transparent)]
    Client(#[from] ClientError),
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
