//! Resource infrastructure: models, records, and lazy iteration.
//!
//! This module provides the typed layer over the SWAPI client:
//!
//! - **[`Resource`] trait**: a standardized interface giving each model
//!   `get()` and `all()`
//! - **[`Record`]**: the untyped field-name to value mapping under every
//!   model, populated verbatim from the wire
//! - **[`QuerySet`]**: the lazy paginated iterator over a whole collection
//! - **[`ResourceError`]**: semantic error types for resource operations
//! - **[`resources`]**: the model implementations ([`People`], [`Film`])
//!
//! # Example
//!
//! ```rust,ignore
//! use starwars_api::{Film, People, Resource, SwapiClient};
//!
//! let client = SwapiClient::new();
//!
//! // Single fetch
//! let luke = People::get(&client, 1).await?;
//! println!("{luke}");
//!
//! // Lazy enumeration across however many pages exist
//! let mut films = Film::all(&client);
//! while let Some(film) = films.try_next().await? {
//!     println!("{film}");
//! }
//!
//! // O(1) collection size (one request on a fresh query set)
//! let total = People::all(&client).count().await?;
//! println!("{total} people");
//! ```

mod errors;
mod query_set;
mod record;
mod resource;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use query_set::QuerySet;
pub use record::Record;
pub use resource::Resource;
pub use resources::{Film, People};
