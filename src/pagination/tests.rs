//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use test_case::test_case;

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct TestQuery {
    cluster: String,
    status: Option<String>,
    cursor: Option<Cursor>,
    page_size: Option<u32>,
}

impl TestQuery {
    fn new(cluster: &str) -> Self {
        Self {
            cluster: cluster.to_string(),
            status: Some("ACTIVE".to_string()),
            cursor: None,
            page_size: None,
        }
    }
}

impl PagedQuery for TestQuery {
    fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    fn set_cursor(&mut self, cursor: Option<Cursor>) {
        self.cursor = cursor;
    }

    fn set_page_size(&mut self, size: u32) {
        self.page_size = Some(size);
    }
}

/// Replays scripted responses and records every query it receives
#[derive(Default)]
struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<Page<String>>>>,
    calls: Mutex<Vec<TestQuery>>,
}

impl ScriptedFetcher {
    fn new(responses: Vec<Result<Page<String>>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<TestQuery> {
        self.calls.lock().unwrap().clone()
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher<TestQuery, String> for ScriptedFetcher {
    async fn fetch(&self, query: &TestQuery) -> Result<Page<String>> {
        self.calls.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("fetched past the script".to_string())))
    }
}

fn page(items: &[&str], next: Option<&str>) -> Result<Page<String>> {
    Ok(Page::new(
        items.iter().map(|s| (*s).to_string()).collect(),
        next.map(Cursor::new),
    ))
}

/// Page A (3 items, cursor "c1") then page B (2 items, no cursor)
fn two_page_script() -> ScriptedFetcher {
    ScriptedFetcher::new(vec![
        page(&["a1", "a2", "a3"], Some("c1")),
        page(&["b1", "b2"], None),
    ])
}

/// `count` pages with cursors c1..c{count-1}, the last page has none
fn linear_script(count: usize) -> ScriptedFetcher {
    let responses = (1..=count)
        .map(|i| {
            let item = format!("item{i}");
            let next = (i < count).then(|| format!("c{i}"));
            page(&[item.as_str()], next.as_deref())
        })
        .collect();
    ScriptedFetcher::new(responses)
}

// ============================================================================
// Cursor / Page Tests
// ============================================================================

#[test]
fn test_cursor_is_opaque() {
    let cursor = Cursor::new("eyJvZmZzZXQiOjEwMH0=");
    assert_eq!(cursor.as_str(), "eyJvZmZzZXQiOjEwMH0=");
    assert_eq!(cursor.to_string(), "eyJvZmZzZXQiOjEwMH0=");
    assert_eq!(cursor.into_inner(), "eyJvZmZzZXQiOjEwMH0=");
}

#[test]
fn test_cursor_from_response_treats_empty_as_absent() {
    assert_eq!(Cursor::from_response(None), None);
    assert_eq!(Cursor::from_response(Some(String::new())), None);
    assert_eq!(
        Cursor::from_response(Some("next".to_string())),
        Some(Cursor::new("next"))
    );
}

#[test]
fn test_cursor_serializes_as_plain_string() {
    let json = serde_json::to_string(&Cursor::new("abc")).unwrap();
    assert_eq!(json, "\"abc\"");

    let cursor: Cursor = serde_json::from_str("\"xyz\"").unwrap();
    assert_eq!(cursor, Cursor::new("xyz"));
}

#[test]
fn test_page_accessors() {
    let page = Page::new(vec![1, 2, 3], Some(Cursor::new("c")));
    assert_eq!(page.len(), 3);
    assert!(!page.is_empty());
    assert!(!page.is_last());

    let last: Page<i32> = Page::last(Vec::new());
    assert!(last.is_empty());
    assert!(last.is_last());
    assert_eq!(last.into_items(), Vec::<i32>::new());
}

// ============================================================================
// Config / State Tests
// ============================================================================

#[test]
fn test_config_builder() {
    let config = PaginatorConfig::new().page_size(50).max_pages(4);
    assert_eq!(config.page_size, Some(50));
    assert_eq!(config.max_pages, Some(4));
    assert!(config.validate().is_ok());
}

#[test_case(0 ; "below minimum")]
#[test_case(101 ; "above maximum")]
fn test_config_rejects_page_size(size: u32) {
    let err = PaginatorConfig::new().page_size(size).validate().unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "page_size"));
}

#[test]
fn test_config_rejects_zero_max_pages() {
    assert!(PaginatorConfig::new().max_pages(0).validate().is_err());
}

#[test]
fn test_state_applies_page_size() {
    let state = PaginationState::new(TestQuery::new("prod"), &PaginatorConfig::new().page_size(25));
    assert_eq!(state.query().page_size, Some(25));
    assert_eq!(state.pages(), 0);
    assert_eq!(state.items(), 0);
}

#[test]
fn test_state_records_pages() {
    let mut state = PaginationState::new(TestQuery::new("prod"), &PaginatorConfig::new());

    let first = page(&["a", "b"], Some("c1")).unwrap();
    assert!(state.record_page(&first).unwrap());
    state.advance(Cursor::new("c1"));
    assert_eq!(state.query().cursor, Some(Cursor::new("c1")));

    let second = page(&["c"], None).unwrap();
    assert!(!state.record_page(&second).unwrap());

    let summary = state.summary(Termination::Exhausted);
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.items, 3);
    assert!(summary.is_exhausted());
}

#[test]
fn test_state_limit_reached() {
    let mut state = PaginationState::new(TestQuery::new("prod"), &PaginatorConfig::new());
    assert!(!state.limit_reached(Some(1)));
    state.record_page(&page(&["a"], Some("c1")).unwrap()).unwrap();
    assert!(state.limit_reached(Some(1)));
    assert!(!state.limit_reached(None));
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[tokio::test]
async fn test_paginate_visits_all_pages() {
    let fetcher = two_page_script();
    let mut visits = Vec::new();

    let summary = Paginator::new()
        .paginate(&fetcher, TestQuery::new("prod"), |page, is_last| {
            visits.push((page.items.clone(), is_last));
            true
        })
        .await
        .unwrap();

    assert_eq!(fetcher.call_count(), 2);
    let expected: Vec<(Vec<String>, bool)> = vec![
        (
            vec!["a1".to_string(), "a2".to_string(), "a3".to_string()],
            false,
        ),
        (vec!["b1".to_string(), "b2".to_string()], true),
    ];
    assert_eq!(visits, expected);
    assert_eq!(
        summary,
        PaginationSummary {
            pages: 2,
            items: 5,
            termination: Termination::Exhausted,
        }
    );
}

#[tokio::test]
async fn test_paginate_stops_when_visitor_declines() {
    let fetcher = two_page_script();
    let mut visited = 0;

    let summary = Paginator::new()
        .paginate(&fetcher, TestQuery::new("prod"), |_, _| {
            visited += 1;
            false
        })
        .await
        .unwrap();

    assert_eq!(fetcher.call_count(), 1);
    assert_eq!(visited, 1);
    assert_eq!(summary.termination, Termination::Stopped);
    assert_eq!(summary.pages, 1);
}

#[tokio::test]
async fn test_paginate_stops_midway() {
    let fetcher = linear_script(5);
    let mut visited = Vec::new();

    let summary = Paginator::new()
        .paginate(&fetcher, TestQuery::new("prod"), |page, _| {
            visited.extend(page.items.clone());
            visited.len() < 2
        })
        .await
        .unwrap();

    assert_eq!(visited, vec!["item1", "item2"]);
    assert_eq!(fetcher.call_count(), 2);
    assert_eq!(fetcher.calls()[1].cursor, Some(Cursor::new("c1")));
    assert_eq!(summary.termination, Termination::Stopped);
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.items, 2);
}

#[tokio::test]
async fn test_stop_on_last_page_reports_exhausted() {
    let fetcher = ScriptedFetcher::new(vec![page(&["only"], None)]);

    let summary = Paginator::new()
        .paginate(&fetcher, TestQuery::new("prod"), |_, is_last| {
            assert!(is_last);
            false
        })
        .await
        .unwrap();

    assert_eq!(summary.termination, Termination::Exhausted);
}

#[tokio::test]
async fn test_cursor_passed_through_verbatim() {
    let fetcher = linear_script(3);

    Paginator::new()
        .paginate(&fetcher, TestQuery::new("prod"), |_, _| true)
        .await
        .unwrap();

    let calls = fetcher.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], TestQuery::new("prod"));
    for (i, pair) in calls.windows(2).enumerate() {
        let mut expected = pair[0].clone();
        expected.cursor = Some(Cursor::new(format!("c{}", i + 1)));
        assert_eq!(pair[1], expected);
    }
}

#[test_case(1 ; "single page")]
#[test_case(2 ; "two pages")]
#[test_case(5 ; "five pages")]
#[test_case(20 ; "twenty pages")]
#[tokio::test]
async fn test_terminates_after_n_fetches(count: usize) {
    let fetcher = linear_script(count);
    let mut seen = Vec::new();

    let summary = Paginator::new()
        .paginate(&fetcher, TestQuery::new("prod"), |page, _| {
            seen.extend(page.items.iter().cloned());
            true
        })
        .await
        .unwrap();

    assert_eq!(fetcher.call_count(), count);
    assert_eq!(summary.pages as usize, count);
    let expected: Vec<String> = (1..=count).map(|i| format!("item{i}")).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn test_fetch_error_propagates_without_visit() {
    let fetcher = ScriptedFetcher::new(vec![
        page(&["a1"], Some("c1")),
        Err(Error::http_status(503, "unavailable")),
        page(&["never"], None),
    ]);
    let mut visited = Vec::new();

    let err = Paginator::new()
        .paginate(&fetcher, TestQuery::new("prod"), |page, _| {
            visited.push(page.items.clone());
            true
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
    assert_eq!(visited, vec![vec!["a1".to_string()]]);
    assert_eq!(fetcher.call_count(), 2);
}

#[tokio::test]
async fn test_first_fetch_error_never_visits() {
    let fetcher = ScriptedFetcher::new(vec![Err(Error::Timeout { timeout_ms: 10 })]);
    let mut visited = false;

    let result = Paginator::new()
        .paginate(&fetcher, TestQuery::new("prod"), |_, _| {
            visited = true;
            true
        })
        .await;

    assert!(matches!(result, Err(Error::Timeout { timeout_ms: 10 })));
    assert!(!visited);
}

#[tokio::test]
async fn test_repeated_cursor_is_fatal() {
    let fetcher = ScriptedFetcher::new(vec![
        page(&["a"], Some("c1")),
        page(&["b"], Some("c2")),
        page(&["c"], Some("c1")),
        page(&["d"], None),
    ]);
    let mut visited = 0;

    let err = Paginator::new()
        .paginate(&fetcher, TestQuery::new("prod"), |_, _| {
            visited += 1;
            true
        })
        .await
        .unwrap_err();

    match err {
        Error::RepeatedCursor { cursor, page } => {
            assert_eq!(cursor, "c1");
            assert_eq!(page, 3);
        }
        other => panic!("Expected RepeatedCursor, got {other:?}"),
    }
    assert_eq!(visited, 2);
    assert_eq!(fetcher.call_count(), 3);
}

#[tokio::test]
async fn test_cursor_echoing_initial_query_is_fatal() {
    let fetcher = ScriptedFetcher::new(vec![page(&["a"], Some("resume"))]);
    let mut query = TestQuery::new("prod");
    query.cursor = Some(Cursor::new("resume"));

    let err = Paginator::new()
        .paginate(&fetcher, query, |_, _| true)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RepeatedCursor { page: 1, .. }));
}

#[tokio::test]
async fn test_page_size_applied_to_every_fetch() {
    let fetcher = two_page_script();
    let paginator = Paginator::with_config(PaginatorConfig::new().page_size(3));

    paginator
        .paginate(&fetcher, TestQuery::new("prod"), |_, _| true)
        .await
        .unwrap();

    assert!(fetcher.calls().iter().all(|q| q.page_size == Some(3)));
}

#[tokio::test]
async fn test_invalid_config_fails_before_fetch() {
    let fetcher = two_page_script();
    let paginator = Paginator::with_config(PaginatorConfig::new().page_size(500));

    let result = paginator
        .paginate(&fetcher, TestQuery::new("prod"), |_, _| true)
        .await;

    assert!(result.is_err());
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_max_pages_caps_fetches() {
    let fetcher = linear_script(5);
    let paginator = Paginator::with_config(PaginatorConfig::new().max_pages(2));
    let mut flags = Vec::new();

    let summary = paginator
        .paginate(&fetcher, TestQuery::new("prod"), |_, is_last| {
            flags.push(is_last);
            true
        })
        .await
        .unwrap();

    assert_eq!(fetcher.call_count(), 2);
    assert_eq!(flags, vec![false, false]);
    assert_eq!(summary.termination, Termination::PageLimit);
}

#[tokio::test]
async fn test_paginate_with_closure_fetcher() {
    let calls = Arc::new(Mutex::new(0_u32));
    let counter = Arc::clone(&calls);
    let fetcher = fetch_fn(move |query: TestQuery| {
        let counter = Arc::clone(&counter);
        async move {
            *counter.lock().unwrap() += 1;
            match query.cursor.as_ref().map(Cursor::as_str) {
                None => Ok(Page::new(vec![1_u32, 2], Some(Cursor::new("next")))),
                Some("next") => Ok(Page::last(vec![3])),
                Some(other) => Err(Error::Other(format!("unexpected cursor {other}"))),
            }
        }
    });

    let items = Paginator::new()
        .collect_all(&fetcher, TestQuery::new("prod"))
        .await
        .unwrap();

    assert_eq!(items, vec![1, 2, 3]);
    assert_eq!(*calls.lock().unwrap(), 2);
}

// ============================================================================
// Stream Tests
// ============================================================================

#[tokio::test]
async fn test_stream_yields_pages_in_order() {
    let fetcher = two_page_script();

    let collected: Vec<Page<String>> = pages(&fetcher, TestQuery::new("prod"), PaginatorConfig::new())
        .map(|page| page.unwrap())
        .collect()
        .await;

    assert_eq!(collected.len(), 2);
    assert!(!collected[0].is_last());
    assert!(collected[1].is_last());
    assert_eq!(fetcher.call_count(), 2);
}

#[tokio::test]
async fn test_stream_is_lazy() {
    let fetcher = linear_script(4);

    {
        let stream = pages(&fetcher, TestQuery::new("prod"), PaginatorConfig::new());
        let first: Vec<_> = stream.take(1).collect().await;
        assert_eq!(first.len(), 1);
    }

    assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn test_stream_ends_after_error() {
    let fetcher = ScriptedFetcher::new(vec![
        page(&["a"], Some("c1")),
        Err(Error::http_status(500, "boom")),
        page(&["b"], None),
    ]);

    let results: Vec<_> = pages(&fetcher, TestQuery::new("prod"), PaginatorConfig::new())
        .collect()
        .await;

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(Error::HttpStatus { status: 500, .. })));
    assert_eq!(fetcher.call_count(), 2);
}

#[tokio::test]
async fn test_stream_reports_invalid_config() {
    let fetcher = two_page_script();

    let results: Vec<_> = pages(
        &fetcher,
        TestQuery::new("prod"),
        PaginatorConfig::new().page_size(0),
    )
    .collect()
    .await;

    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_stream_respects_max_pages() {
    let fetcher = linear_script(10);

    let items = collect_items(
        &fetcher,
        TestQuery::new("prod"),
        PaginatorConfig::new().max_pages(3),
    )
    .await
    .unwrap();

    assert_eq!(items, vec!["item1", "item2", "item3"]);
    assert_eq!(fetcher.call_count(), 3);
}

#[tokio::test]
async fn test_collect_items_propagates_repeated_cursor() {
    let fetcher = ScriptedFetcher::new(vec![page(&["a"], Some("c1")), page(&["b"], Some("c1"))]);

    let err = collect_items(&fetcher, TestQuery::new("prod"), PaginatorConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RepeatedCursor { page: 2, .. }));
}

#[test]
fn test_paginator_runs_outside_async_context() {
    let fetcher = linear_script(2);
    let paginator = Paginator::new();

    let summary = tokio_test::block_on(paginator.paginate(
        &fetcher,
        TestQuery::new("prod"),
        |_, _| true,
    ));

    tokio_test::assert_ok!(&summary);
    assert_eq!(fetcher.call_count(), 2);
}
