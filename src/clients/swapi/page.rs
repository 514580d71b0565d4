//! One page of a paginated SWAPI listing.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A decoded page of a resource listing.
///
/// SWAPI paginates collections server-side; each page carries the total item
/// count for the whole collection, the raw records for this page, and
/// continuation URLs. The count is stable across pages within one listing
/// pass (assuming stable server data).
///
/// Records are kept as raw JSON objects here; the resource layer wraps them
/// into typed models.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Total number of items across all pages of the collection.
    pub count: u64,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// The raw records for this page, in server order.
    pub results: Vec<Map<String, Value>>,
}

impl Page {
    /// Returns `true` if the server advertises a page after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if this page carries no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
