//! People resource implementation.
//!
//! This module provides the [`People`] model for the `people` collection:
//! individual characters within the Star Wars universe.
//!
//! # Example
//!
//! ```rust,ignore
//! use starwars_api::{People, Resource, SwapiClient};
//!
//! let client = SwapiClient::new();
//!
//! // Fetch one person by id
//! let luke = People::get(&client, 1).await?;
//! println!("{luke}");                 // Person: Luke Skywalker
//! println!("{}", luke.height()?);     // "172"
//!
//! // Enumerate everyone
//! let mut people = People::all(&client);
//! while let Some(person) = people.try_next().await? {
//!     println!("{person}");
//! }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};

use crate::clients::ResourceKind;
use crate::rest::{Record, Resource, ResourceError};

/// A single person from the `people` collection.
///
/// The model carries its source record verbatim; the accessors below cover
/// the fields SWAPI documents for this resource, and any undocumented extra
/// fields remain reachable through [`People::record`]. All accessors fail at
/// access time if the field is absent, never at construction time.
///
/// Numeric-looking fields (`height`, `mass`) are exposed as strings because
/// that is how the API serves them ("172", but also "unknown").
#[derive(Debug, Clone, PartialEq)]
pub struct People {
    record: Record,
}

impl People {
    /// The person's name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the record has no `name`.
    pub fn name(&self) -> Result<&str, ResourceError> {
        self.record.get_str("name")
    }

    /// The person's height in centimeters, as served (e.g., "172" or
    /// "unknown").
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn height(&self) -> Result<&str, ResourceError> {
        self.record.get_str("height")
    }

    /// The person's mass in kilograms, as served.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn mass(&self) -> Result<&str, ResourceError> {
        self.record.get_str("mass")
    }

    /// Hair color.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn hair_color(&self) -> Result<&str, ResourceError> {
        self.record.get_str("hair_color")
    }

    /// Skin color.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn skin_color(&self) -> Result<&str, ResourceError> {
        self.record.get_str("skin_color")
    }

    /// Eye color.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn eye_color(&self) -> Result<&str, ResourceError> {
        self.record.get_str("eye_color")
    }

    /// Birth year, in in-universe notation (e.g., "19BBY").
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn birth_year(&self) -> Result<&str, ResourceError> {
        self.record.get_str("birth_year")
    }

    /// Gender, as served.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn gender(&self) -> Result<&str, ResourceError> {
        self.record.get_str("gender")
    }

    /// URL of the person's homeworld planet record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn homeworld(&self) -> Result<&str, ResourceError> {
        self.record.get_str("homeworld")
    }

    /// URLs of the films this person appears in.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent, or
    /// [`ResourceError::UnexpectedType`] if it is not an array of strings.
    pub fn films(&self) -> Result<Vec<&str>, ResourceError> {
        self.record.get_str_array("films")
    }

    /// Canonical URL of this record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn url(&self) -> Result<&str, ResourceError> {
        self.record.get_str("url")
    }

    /// When the record was created server-side.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent, or
    /// [`ResourceError::UnexpectedType`] if it is not an RFC 3339
    /// timestamp.
    pub fn created(&self) -> Result<DateTime<Utc>, ResourceError> {
        self.record.get_datetime("created")
    }

    /// When the record was last edited server-side.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent, or
    /// [`ResourceError::UnexpectedType`] if it is not an RFC 3339
    /// timestamp.
    pub fn edited(&self) -> Result<DateTime<Utc>, ResourceError> {
        self.record.get_datetime("edited")
    }

    /// Consumes the model and returns the underlying record.
    #[must_use]
    pub fn into_record(self) -> Record {
        self.record
    }
}

impl Resource for People {
    const KIND: ResourceKind = ResourceKind::People;

    fn from_record(record: Record) -> Self {
        Self { record }
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

impl fmt::Display for People {
    /// Renders as `Person: <name>`.
    ///
    /// Rendering never fails: a record without a `name` field displays with
    /// an empty name. Names are `String`s, so non-ASCII text passes through
    /// untouched.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person: {}", self.name().unwrap_or_default())
    }
}
