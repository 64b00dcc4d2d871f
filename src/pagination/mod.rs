//! Pagination module
//!
//! Cursor-based paging over list operations.
//!
//! # Overview
//!
//! A list operation returns one bounded [`Page`] plus an optional opaque
//! [`Cursor`]. The [`Paginator`] turns a single-page [`PageFetcher`] into a
//! full iteration: it passes each page to a visitor, follows the cursor
//! verbatim, stops when the server returns no cursor or the visitor says so,
//! and refuses to follow a cursor it has already seen.
//!
//! [`pages`] exposes the same iteration as a lazy `Stream`.

mod fetcher;
mod paginator;
mod stream;
mod types;

pub use fetcher::{fetch_fn, FnFetcher, PageFetcher};
pub use paginator::Paginator;
pub use stream::{collect_items, pages};
pub use types::{
    Cursor, Page, PagedQuery, PaginationState, PaginationSummary, PaginatorConfig, Termination,
    MAX_PAGE_SIZE, MIN_PAGE_SIZE,
};

#[cfg(test)]
mod tests;
