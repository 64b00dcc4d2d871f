//! Fetch capability
//!
//! The paginator never talks to a transport directly. Whatever performs
//! the round-trip for one page (HTTP client, test stub, cache) implements
//! [`PageFetcher`]. Retry policy, deadlines and authentication all live on
//! that side of the seam.

use super::types::Page;
use crate::error::Result;
use async_trait::async_trait;
use std::future::Future;

/// Performs one remote call for one page
#[async_trait]
pub trait PageFetcher<Q: Send + Sync, T: Send>: Send + Sync {
    /// Fetch the page selected by `query`
    async fn fetch(&self, query: &Q) -> Result<Page<T>>;
}

/// Adapter turning an async closure into a [`PageFetcher`]
#[derive(Clone)]
pub struct FnFetcher<F> {
    f: F,
}

/// Wrap a closure `Fn(Q) -> impl Future<Output = Result<Page<T>>>`
///
/// The closure receives its own copy of the query for each call.
pub fn fetch_fn<F>(f: F) -> FnFetcher<F> {
    FnFetcher { f }
}

#[async_trait]
impl<Q, T, F, Fut> PageFetcher<Q, T> for FnFetcher<F>
where
    Q: Clone + Send + Sync + 'static,
    T: Send + 'static,
    F: Fn(Q) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T>>> + Send + 'static,
{
    async fn fetch(&self, query: &Q) -> Result<Page<T>> {
        (self.f)(query.clone()).await
    }
}

impl<F> std::fmt::Debug for FnFetcher<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFetcher").finish_non_exhaustive()
    }
}
