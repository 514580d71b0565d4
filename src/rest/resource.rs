//! The resource trait shared by all model types.
//!
//! This module defines the [`Resource`] trait, which provides a standardized
//! interface for interacting with API resources. Resources that implement
//! this trait gain `get()` and `all()` methods.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct wrapping [`Record`]
//! 2. Name its [`ResourceKind`] and wire the record accessors
//! 3. The trait provides default implementations for `get()` and `all()`
//!
//! # Example
//!
//! ```rust,ignore
//! use starwars_api::{Record, Resource, ResourceKind, SwapiClient};
//!
//! #[derive(Debug, Clone)]
//! pub struct People {
//!     record: Record,
//! }
//!
//! impl Resource for People {
//!     const KIND: ResourceKind = ResourceKind::People;
//!
//!     fn from_record(record: Record) -> Self {
//!         Self { record }
//!     }
//!
//!     fn record(&self) -> &Record {
//!         &self.record
//!     }
//! }
//!
//! // Usage:
//! let luke = People::get(&client, 1).await?;
//! let mut all_people = People::all(&client);
//! ```

use crate::clients::{ResourceKind, SwapiClient};
use crate::rest::{QuerySet, Record, ResourceError};

/// An API resource that can be fetched singly or enumerated lazily.
///
/// Implementors name their resource via [`Self::KIND`] and construct
/// themselves from a raw [`Record`]; the trait supplies the fetch
/// operations. The client is always passed in explicitly — there is no
/// process-wide shared client, so tests can inject a double.
#[allow(async_fn_in_trait)]
pub trait Resource: Sized + Send + Sync {
    /// Which API collection this model belongs to.
    const KIND: ResourceKind;

    /// Wraps one raw record into a model instance.
    ///
    /// All fields are carried over verbatim; nothing is validated or
    /// coerced here.
    fn from_record(record: Record) -> Self;

    /// Returns the underlying record.
    fn record(&self) -> &Record;

    /// Fetches a single record by identifier and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the server answers 404 for
    /// this id; any other client failure propagates unchanged as
    /// [`ResourceError::Client`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let leia = People::get(&client, 5).await?;
    /// println!("{leia}");
    /// ```
    async fn get(client: &SwapiClient, id: u64) -> Result<Self, ResourceError> {
        match client.fetch_by_id(Self::KIND, id).await {
            Ok(fields) => Ok(Self::from_record(Record::new(fields))),
            Err(e) if e.status() == Some(404) => Err(ResourceError::NotFound {
                resource: Self::KIND.as_str(),
                id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns a lazy query set over every record of this resource.
    ///
    /// No request is made until the query set is first advanced.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut people = People::all(&client);
    /// while let Some(person) = people.try_next().await? {
    ///     println!("{person}");
    /// }
    /// ```
    #[must_use]
    fn all(client: &SwapiClient) -> QuerySet<'_, Self> {
        QuerySet::new(client)
    }
}
