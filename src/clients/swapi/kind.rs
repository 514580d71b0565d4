//! The closed set of resource types exposed by the API.

use std::fmt;

/// A resource collection exposed by SWAPI.
///
/// This is a closed, known-at-compile-time set; behavior that varies per
/// resource (URL path segment, model constructor) is resolved with a `match`
/// on this enum rather than a runtime lookup table.
///
/// # Example
///
/// ```rust
/// use starwars_api::ResourceKind;
///
/// assert_eq!(ResourceKind::People.as_str(), "people");
/// assert_eq!(ResourceKind::Films.to_string(), "films");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// The `people` collection.
    People,
    /// The `films` collection.
    Films,
}

impl ResourceKind {
    /// Returns the resource name as it appears in URL paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Films => "films",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
