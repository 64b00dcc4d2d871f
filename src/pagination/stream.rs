//! Lazy page stream
//!
//! Same session rules as [`super::Paginator::paginate`], exposed as a
//! `futures::Stream`. Nothing is fetched until the stream is polled and
//! dropping it stops the iteration.

use super::fetcher::PageFetcher;
use super::types::{Page, PagedQuery, PaginationState, PaginatorConfig};
use crate::error::Result;
use futures::stream::{self, Stream, TryStreamExt};

/// Stream the pages of `query`.
///
/// Yields at most one error, after which the stream ends.
pub fn pages<'a, Q, T, F>(
    fetcher: &'a F,
    query: Q,
    config: PaginatorConfig,
) -> impl Stream<Item = Result<Page<T>>> + Send + 'a
where
    Q: PagedQuery + Send + Sync + 'a,
    T: Send + 'a,
    F: PageFetcher<Q, T> + ?Sized,
{
    let start = config
        .validate()
        .map(|()| PaginationState::new(query, &config));
    let max_pages = config.max_pages;

    stream::unfold(Some(start), move |slot| async move {
        let mut state = match slot {
            Some(Ok(state)) => state,
            Some(Err(e)) => return Some((Err(e), None)),
            None => return None,
        };

        let page = match fetcher.fetch(state.query()).await {
            Ok(page) => page,
            Err(e) => return Some((Err(e), None)),
        };

        if let Err(e) = state.record_page(&page) {
            return Some((Err(e), None));
        }

        let next = match &page.next_cursor {
            Some(cursor) if !state.limit_reached(max_pages) => {
                state.advance(cursor.clone());
                Some(Ok(state))
            }
            _ => None,
        };

        Some((Ok(page), next))
    })
}

/// Fetch every page of `query` and return the items in order
pub async fn collect_items<Q, T, F>(fetcher: &F, query: Q, config: PaginatorConfig) -> Result<Vec<T>>
where
    Q: PagedQuery + Send + Sync,
    T: Send,
    F: PageFetcher<Q, T> + ?Sized,
{
    let stream = pages(fetcher, query, config);
    futures::pin_mut!(stream);

    let mut items = Vec::new();
    while let Some(page) = stream.try_next().await? {
        items.extend(page.items);
    }
    Ok(items)
}
