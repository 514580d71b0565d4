//! Lazy paginated iteration over a resource collection.
//!
//! This module provides [`QuerySet`], the iterator abstraction that walks a
//! multi-page listing and yields one typed model per advance, fetching pages
//! from the client only as they are needed.
//!
//! # Laziness
//!
//! Building a query set performs no I/O. The first call to
//! [`QuerySet::try_next`] (or [`QuerySet::count`]) fetches page 1 to learn
//! the collection's total item count; subsequent advances consume the cached
//! page and fetch the next page only when the current one is exhausted.
//!
//! # Example
//!
//! ```rust,ignore
//! use starwars_api::{People, Resource, SwapiClient};
//!
//! let client = SwapiClient::new();
//! let mut people = People::all(&client);
//!
//! while let Some(person) = people.try_next().await? {
//!     println!("{person}");
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::clients::SwapiClient;
use crate::rest::{Record, Resource, ResourceError};

/// Listings start at page 1; SWAPI rejects page 0.
const FIRST_PAGE: u32 = 1;

/// A lazy, stateful iterator over every record of one resource type.
///
/// Each query set owns its cursor exclusively; nothing is shared between
/// instances, and no locking is involved. Advancing may await one network
/// round trip when a page boundary is crossed. There is no prefetching and
/// no page cache beyond the current page.
///
/// # Exhaustion
///
/// Draining past the end is not an error: [`QuerySet::try_next`] returns
/// `Ok(None)` once the total reported by the server has been yielded, and
/// keeps returning `Ok(None)` on further calls. Use [`QuerySet::restart`]
/// (or build a fresh query set) to begin a new pass; a new pass re-fetches
/// page 1 and the total fresh, with no consistency guarantee across passes
/// if the server data changed in between.
///
/// # Failure
///
/// Any client failure propagates unchanged. The cursor is left in an
/// unspecified state after an error; callers must not resume iteration and
/// should restart instead.
pub struct QuerySet<'a, T> {
    client: &'a SwapiClient,
    cursor: Option<Cursor>,
    _resource: PhantomData<fn() -> T>,
}

/// Iteration state: where the pass is within the collection.
#[derive(Debug)]
struct Cursor {
    /// Total item count across all pages, learned from the first fetch.
    total: u64,
    /// Current page number (1-based).
    page: u32,
    /// Index of the next unconsumed item within `results`.
    index: usize,
    /// Items already yielded in this pass.
    yielded: u64,
    /// The current page's records.
    results: Vec<Map<String, Value>>,
}

impl Cursor {
    fn start(total: u64, results: Vec<Map<String, Value>>) -> Self {
        Self {
            total,
            page: FIRST_PAGE,
            index: 0,
            yielded: 0,
            results,
        }
    }
}

impl<'a, T: Resource> QuerySet<'a, T> {
    /// Creates a query set borrowing the given client.
    ///
    /// No request is made until the first advance.
    #[must_use]
    pub(crate) fn new(client: &'a SwapiClient) -> Self {
        Self {
            client,
            cursor: None,
            _resource: PhantomData,
        }
    }

    /// Produces the next model in the pass, or `None` once exhausted.
    ///
    /// Crossing a page boundary resets the in-page index to 0 and fetches
    /// the next page; within a page the index advances after every yield.
    ///
    /// # Errors
    ///
    /// Any failure from the client (network error, non-success status,
    /// malformed payload) propagates unchanged as
    /// [`ResourceError::Client`]. No items beyond those already yielded are
    /// produced after an error.
    pub async fn try_next(&mut self) -> Result<Option<T>, ResourceError> {
        self.ensure_started().await?;

        let cursor = self.cursor_mut();
        if cursor.yielded >= cursor.total {
            return Ok(None);
        }

        if cursor.index >= cursor.results.len() {
            let next_page = cursor.page + 1;
            let page = self.client.fetch_page(T::KIND, next_page).await?;
            let cursor = self.cursor_mut();
            cursor.page = next_page;
            cursor.results = page.results;
            cursor.index = 0;
        }

        let cursor = self.cursor_mut();
        let Some(fields) = cursor.results.get(cursor.index).cloned() else {
            // The server returned fewer items than `count` promised; treat
            // the shortfall as the end of the pass.
            return Ok(None);
        };

        cursor.index += 1;
        cursor.yielded += 1;

        Ok(Some(T::from_record(Record::new(fields))))
    }

    /// Returns the total number of items in the collection.
    ///
    /// The total is the count reported by the server on the first page
    /// fetch; calling this on a fresh query set costs exactly one request,
    /// and on an already-started one it costs nothing.
    ///
    /// # Errors
    ///
    /// Propagates the client failure if the initial page fetch fails.
    pub async fn count(&mut self) -> Result<u64, ResourceError> {
        self.ensure_started().await?;
        Ok(self.cursor_mut().total)
    }

    /// Resets the query set so the next advance begins a fresh pass.
    ///
    /// The total item count and page 1 are re-fetched on the next advance;
    /// totals may differ between passes if the server data changed.
    pub fn restart(&mut self) {
        self.cursor = None;
    }

    /// Drains the remainder of the pass into a `Vec`.
    ///
    /// # Errors
    ///
    /// Propagates the first client failure; items yielded before the
    /// failure are discarded.
    pub async fn try_collect(mut self) -> Result<Vec<T>, ResourceError> {
        let mut items = Vec::new();
        while let Some(item) = self.try_next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Fetches page 1 to learn the collection total if this pass has not
    /// started yet.
    async fn ensure_started(&mut self) -> Result<(), ResourceError> {
        if self.cursor.is_none() {
            let first = self.client.fetch_page(T::KIND, FIRST_PAGE).await?;
            self.cursor = Some(Cursor::start(first.count, first.results));
        }
        Ok(())
    }

    /// Returns the cursor of a started pass.
    fn cursor_mut(&mut self) -> &mut Cursor {
        // Callers run `ensure_started` first.
        self.cursor.as_mut().expect("pass started")
    }
}

impl<T: Resource> fmt::Debug for QuerySet<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("QuerySet");
        dbg.field("resource", &T::KIND);
        match &self.cursor {
            Some(cursor) => dbg
                .field("total", &cursor.total)
                .field("page", &cursor.page)
                .field("yielded", &cursor.yielded),
            None => dbg.field("state", &"unstarted"),
        };
        dbg.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::People;

    #[test]
    fn test_new_query_set_performs_no_io() {
        // Construction against an unroutable endpoint must succeed; only
        // advancing talks to the network.
        let config = crate::config::SwapiConfig::builder()
            .base_url(crate::config::ApiBaseUrl::new("http://192.0.2.1:1").unwrap())
            .build();
        let client = SwapiClient::with_config(&config);
        let query_set = People::all(&client);
        assert!(format!("{query_set:?}").contains("unstarted"));
    }

    #[test]
    fn test_debug_names_the_resource() {
        let client = SwapiClient::new();
        let query_set = People::all(&client);
        let rendered = format!("{query_set:?}");
        assert!(rendered.contains("QuerySet"));
        assert!(rendered.contains("People"));
    }

    #[test]
    fn test_cursor_start_state() {
        let cursor = Cursor::start(25, Vec::new());
        assert_eq!(cursor.total, 25);
        assert_eq!(cursor.page, FIRST_PAGE);
        assert_eq!(cursor.index, 0);
        assert_eq!(cursor.yielded, 0);
    }
}
