//! Film resource implementation.
//!
//! This module provides the [`Film`] model for the `films` collection.
//!
//! # Example
//!
//! ```rust,ignore
//! use starwars_api::{Film, Resource, SwapiClient};
//!
//! let client = SwapiClient::new();
//!
//! let hope = Film::get(&client, 1).await?;
//! println!("{hope}");                       // Film: A New Hope
//! println!("episode {}", hope.episode_id()?);
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::clients::ResourceKind;
use crate::rest::{Record, Resource, ResourceError};

/// A single film from the `films` collection.
///
/// Like [`People`](crate::People), the model is a verbatim view over its
/// source record with typed accessors for the documented fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    record: Record,
}

impl Film {
    /// The film's title.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the record has no `title`.
    pub fn title(&self) -> Result<&str, ResourceError> {
        self.record.get_str("title")
    }

    /// The episode number within the saga.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent, or
    /// [`ResourceError::UnexpectedType`] if it is not an integer.
    pub fn episode_id(&self) -> Result<u64, ResourceError> {
        self.record.get_u64("episode_id")
    }

    /// The opening crawl text.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn opening_crawl(&self) -> Result<&str, ResourceError> {
        self.record.get_str("opening_crawl")
    }

    /// The film's director.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn director(&self) -> Result<&str, ResourceError> {
        self.record.get_str("director")
    }

    /// The film's producer(s), comma-separated as served.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent.
    pub fn producer(&self) -> Result<&str, ResourceError> {
        self.record.get_str("producer")
    }

    /// Theatrical release date.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent, or
    /// [`ResourceError::UnexpectedType`] if it does not parse as an ISO
    /// date.
    pub fn release_date(&self) -> Result<NaiveDate, ResourceError> {
        let raw = self.record.get_str("release_date")?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ResourceError::UnexpectedType {
            field: "release_date".to_string(),
            expected: "an ISO 8601 date",
        })
    }

    /// URLs of the people appearing in this film.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent, or
    /// [`ResourceError::UnexpectedType`] if it is not an array of strings.
    pub fn characters(&self) -> Result<Vec<&str>, ResourceError> {
        self.record.get_str_array("characters")
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

impl Resource for Film {
    const KIND: ResourceKind = ResourceKind::Films;

    fn from_record(record: Record) -> Self {
        Self { record }
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

impl fmt::Display for Film {
    /// Renders as `Film: <title>`.
    ///
    /// Rendering never fails: a record without a `title` field displays
    /// with an empty title.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Film: {}", self.title().unwrap_or_default())
    }
}
