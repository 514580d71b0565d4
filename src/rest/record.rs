//! Raw record storage for API resources.
//!
//! This module provides [`Record`], the untyped substrate under every model:
//! a mapping from field name to JSON value, populated verbatim from one
//! server-side record.
//!
//! # Design
//!
//! Records enforce no schema. Every key of the source object is preserved
//! as-is — including fields this library knows nothing about — and nothing
//! is coerced at construction time. Accessing an absent field fails at
//! access time with [`ResourceError::MissingField`]; typed accessors fail
//! with [`ResourceError::UnexpectedType`] when the field exists but has a
//! different shape.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use starwars_api::Record;
//!
//! let record: Record = serde_json::from_value(json!({
//!     "name": "Leia Organa",
//!     "height": "150"
//! }))
//! .unwrap();
//!
//! assert_eq!(record.get_str("name").unwrap(), "Leia Organa");
//! assert!(record.get("birth_year").is_err());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::ResourceError;

/// One raw API record: a field-name to value mapping.
///
/// Records are created fresh for each yielded item, are not cached, and are
/// not mutated after construction by any API in this library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Creates a record from a decoded JSON object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Returns the value of a field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the record has no field
    /// with that name.
    pub fn get(&self, field: &str) -> Result<&Value, ResourceError> {
        self.fields
            .get(field)
            .ok_or_else(|| ResourceError::MissingField {
                field: field.to_string(),
            })
    }

    /// Returns the value of a string field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent, or
    /// [`ResourceError::UnexpectedType`] if it is not a string.
    pub fn get_str(&self, field: &str) -> Result<&str, ResourceError> {
        self.get(field)?
            .as_str()
            .ok_or_else(|| ResourceError::UnexpectedType {
                field: field.to_string(),
                expected: "a string",
            })
    }

    /// Returns the value of an unsigned integer field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent, or
    /// [`ResourceError::UnexpectedType`] if it is not a non-negative
    /// integer.
    pub fn get_u64(&self, field: &str) -> Result<u64, ResourceError> {
        self.get(field)?
            .as_u64()
            .ok_or_else(|| ResourceError::UnexpectedType {
                field: field.to_string(),
                expected: "an unsigned integer",
            })
    }

    /// Returns the value of a field holding an array of strings.
    ///
    /// SWAPI uses these for cross-resource URL lists (a person's films, a
    /// film's characters).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent, or
    /// [`ResourceError::UnexpectedType`] if it is not an array of strings.
    pub fn get_str_array(&self, field: &str) -> Result<Vec<&str>, ResourceError> {
        let unexpected = || ResourceError::UnexpectedType {
            field: field.to_string(),
            expected: "an array of strings",
        };

        self.get(field)?
            .as_array()
            .ok_or_else(unexpected)?
            .iter()
            .map(|v| v.as_str().ok_or_else(unexpected))
            .collect()
    }

    /// Returns the value of an RFC 3339 timestamp field.
    ///
    /// SWAPI stamps every record with `created` and `edited` fields in this
    /// format.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the field is absent, or
    /// [`ResourceError::UnexpectedType`] if it does not parse as an
    /// RFC 3339 timestamp.
    pub fn get_datetime(&self, field: &str) -> Result<DateTime<Utc>, ResourceError> {
        let raw = self.get_str(field)?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| ResourceError::UnexpectedType {
                field: field.to_string(),
                expected: "an RFC 3339 timestamp",
            })
    }

    /// Returns `true` if the record has a field with the given name.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the record's fields in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
