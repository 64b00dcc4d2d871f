//! Pagination types and traits
//!
//! Defines the cursor, page and session abstractions shared by the
//! paginator and the page stream.

use crate::error::{Error, Result};
use crate::types::OptionStringExt;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// Smallest page size hint a list operation accepts
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest page size hint a list operation accepts
pub const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Cursor
// ============================================================================

/// Opaque continuation token returned by a listing response.
///
/// The contents are defined solely by the server. They are never parsed,
/// only handed back verbatim on the next request of the same query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Wrap a token taken from a response, treating an empty token as absent
    pub fn from_response(token: Option<String>) -> Option<Self> {
        token.none_if_empty().map(Self)
    }

    /// Borrow the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the raw token
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Page
// ============================================================================

/// One bounded batch of items returned by a single fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Present iff more results exist
    pub next_cursor: Option<Cursor>,
}

impl<T> Page<T> {
    /// Create a page that continues with the given cursor
    pub fn new(items: Vec<T>, next_cursor: Option<Cursor>) -> Self {
        Self { items, next_cursor }
    }

    /// Create a terminal page
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
        }
    }

    /// True when the server signalled no more results
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the page, keeping only its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

// ============================================================================
// Paged Query
// ============================================================================

/// A list query that can carry a continuation cursor and a page size hint.
///
/// Every field other than the cursor must stay fixed across the pages of
/// one iteration; the paginator only ever touches the cursor after the
/// first fetch.
pub trait PagedQuery: Clone {
    /// Current cursor, if any
    fn cursor(&self) -> Option<&Cursor>;

    /// Replace the cursor
    fn set_cursor(&mut self, cursor: Option<Cursor>);

    /// Apply an advisory page size. Queries without a size field ignore it.
    fn set_page_size(&mut self, _size: u32) {}
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for pagination behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Page size hint applied to the query before the first fetch
    pub page_size: Option<u32>,
    /// Maximum number of fetches per iteration
    pub max_pages: Option<u32>,
}

impl PaginatorConfig {
    /// Create an empty config (server defaults, no page cap)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size hint
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Cap the number of pages fetched
    #[must_use]
    pub fn max_pages(mut self, pages: u32) -> Self {
        self.max_pages = Some(pages);
        self
    }

    /// Check the config before any fetch is issued
    pub fn validate(&self) -> Result<()> {
        if let Some(size) = self.page_size {
            if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
                return Err(Error::invalid_value(
                    "page_size",
                    format!("{size} is outside {MIN_PAGE_SIZE}..={MAX_PAGE_SIZE}"),
                ));
            }
        }
        if self.max_pages == Some(0) {
            return Err(Error::invalid_value("max_pages", "must be at least 1"));
        }
        Ok(())
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Why an iteration ended successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The server returned a page without a next cursor
    Exhausted,
    /// The visitor asked to stop
    Stopped,
    /// The configured page cap was reached
    PageLimit,
}

/// Summary of a finished iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary {
    /// Pages fetched and visited
    pub pages: u32,
    /// Items across all visited pages
    pub items: u64,
    /// Why iteration ended
    pub termination: Termination,
}

impl PaginationSummary {
    /// True if every page the server had was visited
    pub fn is_exhausted(&self) -> bool {
        self.termination == Termination::Exhausted
    }
}

// ============================================================================
// Session
// ============================================================================

/// Ephemeral state of one pagination session.
///
/// Owned by a single iteration and dropped when it ends.
#[derive(Debug, Clone)]
pub struct PaginationState<Q> {
    query: Q,
    seen: HashSet<Cursor>,
    pages: u32,
    items: u64,
}

impl<Q: PagedQuery> PaginationState<Q> {
    /// Start a session, applying the configured page size to the query
    pub fn new(mut query: Q, config: &PaginatorConfig) -> Self {
        if let Some(size) = config.page_size {
            query.set_page_size(size);
        }
        let mut seen = HashSet::new();
        if let Some(cursor) = query.cursor() {
            seen.insert(cursor.clone());
        }
        Self {
            query,
            seen,
            pages: 0,
            items: 0,
        }
    }

    /// Query for the next fetch
    pub fn query(&self) -> &Q {
        &self.query
    }

    /// Pages recorded so far
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Items recorded so far
    pub fn items(&self) -> u64 {
        self.items
    }

    /// Record a fetched page. Returns whether more pages exist.
    ///
    /// Fails if the page's cursor was already used in this session, since
    /// following it again could loop forever.
    pub fn record_page<T>(&mut self, page: &Page<T>) -> Result<bool> {
        let number = self.pages + 1;
        if let Some(cursor) = &page.next_cursor {
            if !self.seen.insert(cursor.clone()) {
                warn!(page = number, cursor = %cursor, "Server returned a cursor already seen");
                return Err(Error::RepeatedCursor {
                    cursor: cursor.to_string(),
                    page: number,
                });
            }
        }
        self.pages = number;
        self.items += page.len() as u64;
        Ok(page.next_cursor.is_some())
    }

    /// Move the query to the next cursor, leaving every other field alone
    pub fn advance(&mut self, cursor: Cursor) {
        self.query.set_cursor(Some(cursor));
    }

    /// True once `max_pages` pages have been recorded
    pub fn limit_reached(&self, max_pages: Option<u32>) -> bool {
        max_pages.is_some_and(|max| self.pages >= max)
    }

    /// Build the summary for a finished session
    pub fn summary(&self, termination: Termination) -> PaginationSummary {
        PaginationSummary {
            pages: self.pages,
            items: self.items,
            termination,
        }
    }
}
