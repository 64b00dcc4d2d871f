//! Cursor-driven page iteration
//!
//! One loop serves every list operation: fetch, visit, follow the cursor.

use super::fetcher::PageFetcher;
use super::stream::collect_items;
use super::types::{
    Page, PagedQuery, PaginationState, PaginationSummary, PaginatorConfig, Termination,
};
use crate::error::Result;
use tracing::{debug, info};

/// Drives repeated fetches against a listing endpoint.
///
/// Each call to [`Paginator::paginate`] owns its own session; a `Paginator`
/// only holds configuration and can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator {
    config: PaginatorConfig,
}

impl Paginator {
    /// Create a paginator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paginator with custom configuration
    pub fn with_config(config: PaginatorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Visit every page of `query` in server order.
    ///
    /// `visitor` receives each page together with an `is_last_page` flag that
    /// is true iff the server returned no next cursor. Returning `false` ends
    /// the iteration without another fetch.
    ///
    /// A fetch error is returned as-is and the visitor is not called for the
    /// failed page. Pages already visited stay visited. No retries happen
    /// here; they belong to the fetcher.
    pub async fn paginate<Q, T, F, V>(
        &self,
        fetcher: &F,
        query: Q,
        mut visitor: V,
    ) -> Result<PaginationSummary>
    where
        Q: PagedQuery + Send + Sync,
        T: Send,
        F: PageFetcher<Q, T> + ?Sized,
        V: FnMut(&Page<T>, bool) -> bool,
    {
        self.config.validate()?;
        let mut state = PaginationState::new(query, &self.config);

        loop {
            let page = fetcher.fetch(state.query()).await?;
            let has_more = state.record_page(&page)?;

            debug!(
                page = state.pages(),
                items = page.len(),
                has_more,
                "Fetched page"
            );

            let keep_going = visitor(&page, !has_more);

            // The server's last page wins over a stop request on that same page.
            let termination = match page.next_cursor {
                None => Some(Termination::Exhausted),
                Some(_) if !keep_going => Some(Termination::Stopped),
                Some(_) if state.limit_reached(self.config.max_pages) => {
                    Some(Termination::PageLimit)
                }
                Some(next) => {
                    state.advance(next);
                    None
                }
            };

            if let Some(termination) = termination {
                let summary = state.summary(termination);
                info!(
                    pages = summary.pages,
                    items = summary.items,
                    ?termination,
                    "Pagination finished"
                );
                return Ok(summary);
            }
        }
    }

    /// Fetch every page and return all items in order
    pub async fn collect_all<Q, T, F>(&self, fetcher: &F, query: Q) -> Result<Vec<T>>
    where
        Q: PagedQuery + Send + Sync,
        T: Send,
        F: PageFetcher<Q, T> + ?Sized,
    {
        collect_items(fetcher, query, self.config).await
    }
}
