//! Reusable fetch → filter/paginate → mutate → refetch machinery behind
//! every list page.
//!
//! The state transitions live in the plain [`ListState`] struct so they can
//! be tested on the host; [`ListController`] is the thin reactive wrapper
//! that owns the signal and spawns the actual requests.

use crate::shared::api::{ApiError, ListQuery};
use contracts::paging::ListResult;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// 1-based, clamped server-side via the paging block.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub search: String,
    pub date_from: String,
    pub date_to: String,
    pub filters: BTreeMap<String, String>,
    /// Sequence number of the newest fetch issued. Responses carrying an
    /// older number are stale and must not be applied, whatever order they
    /// arrive in.
    seq: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            page: 1,
            page_size: PAGE_SIZES[0],
            total_pages: 0,
            total_items: 0,
            search: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            filters: BTreeMap::new(),
            seq: 0,
        }
    }
}

impl<T> ListState<T> {
    /// A half-open date range must not reach the backend; fetching waits
    /// until both endpoints are set or both are cleared.
    pub fn range_ready(&self) -> bool {
        self.date_from.is_empty() == self.date_to.is_empty()
    }

    pub fn query(&self) -> ListQuery {
        let mut query = ListQuery {
            page: self.page,
            size: self.page_size,
            ..Default::default()
        };
        if !self.search.trim().is_empty() {
            query.search = Some(self.search.trim().to_string());
        }
        if !self.date_from.is_empty() && !self.date_to.is_empty() {
            query.start_at = Some(self.date_from.clone());
            query.end_at = Some(self.date_to.clone());
        }
        query.filters = self.filters.clone();
        query
    }

    /// Marks a fetch as started and returns its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.seq += 1;
        self.seq
    }

    /// Applies a successful page. Returns `false` (untouched state) when a
    /// newer fetch has been issued since `seq`.
    pub fn apply_success(&mut self, seq: u64, result: ListResult<T>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.items = result.items;
        self.page = result.page;
        self.total_pages = result.total_pages;
        self.total_items = result.total_items;
        self.loading = false;
        true
    }

    /// Failure path: the list goes empty and the loading flag is released.
    /// Stale failures are ignored; the newer in-flight fetch will settle.
    pub fn apply_error(&mut self, seq: u64) {
        if seq != self.seq {
            return;
        }
        self.items = Vec::new();
        self.total_pages = 0;
        self.total_items = 0;
        self.loading = false;
    }

    // Filter transitions. Every non-page mutation resets to page 1; the
    // return value says whether a fetch should follow.

    pub fn set_search(&mut self, search: String) -> bool {
        self.search = search;
        self.page = 1;
        true
    }

    pub fn set_page(&mut self, page: usize) -> bool {
        self.page = page.max(1);
        true
    }

    pub fn set_page_size(&mut self, size: usize) -> bool {
        self.page_size = size.max(1);
        self.page = 1;
        true
    }

    pub fn set_filter(&mut self, key: &str, value: Option<String>) -> bool {
        match value {
            Some(value) => {
                self.filters.insert(key.to_string(), value);
            }
            None => {
                self.filters.remove(key);
            }
        }
        self.page = 1;
        true
    }

    pub fn set_date_range(&mut self, from: String, to: String) -> bool {
        self.date_from = from;
        self.date_to = to;
        self.page = 1;
        self.range_ready()
    }
}

type ListFetcher<T> =
    Rc<dyn Fn(ListQuery) -> Pin<Box<dyn Future<Output = Result<ListResult<T>, ApiError>>>>>;

/// Copyable handle owning one list's state and its fetcher.
pub struct ListController<T: Clone + Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
    fetcher: StoredValue<ListFetcher<T>, LocalStorage>,
}

impl<T: Clone + Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + Send + Sync + 'static> Copy for ListController<T> {}

impl<T: Clone + Send + Sync + 'static> ListController<T> {
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn(ListQuery) -> Fut + 'static,
        Fut: Future<Output = Result<ListResult<T>, ApiError>> + 'static,
    {
        Self {
            state: RwSignal::new(ListState::default()),
            fetcher: StoredValue::new_local(Rc::new(move |query| {
                Box::pin(fetch(query)) as Pin<Box<dyn Future<Output = _>>>
            })),
        }
    }

    /// Issues one fetch for the current query. The loading flag is released
    /// on every exit path, including errors and stale completions.
    pub fn refetch(&self) {
        let Some(seq) = self.state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let query = self.state.with_untracked(|s| s.query());
        let state = self.state;
        let fetcher = self.fetcher;
        spawn_local(async move {
            // The stored fetcher disappears when the owning view is torn
            // down; a fetch racing teardown simply does nothing.
            let Some(future) = fetcher.try_with_value(|f| f(query)) else {
                return;
            };
            match future.await {
                Ok(result) => {
                    state.try_update(|s| s.apply_success(seq, result));
                }
                Err(error) => {
                    log::error!("list fetch failed: {error}");
                    state.try_update(|s| s.apply_error(seq));
                }
            }
        });
    }

    pub fn set_search(&self, search: String) {
        if self.state.try_update(|s| s.set_search(search)) == Some(true) {
            self.refetch();
        }
    }

    pub fn set_page(&self, page: usize) {
        if self.state.try_update(|s| s.set_page(page)) == Some(true) {
            self.refetch();
        }
    }

    pub fn set_page_size(&self, size: usize) {
        if self.state.try_update(|s| s.set_page_size(size)) == Some(true) {
            self.refetch();
        }
    }

    pub fn set_filter(&self, key: &str, value: Option<String>) {
        if self.state.try_update(|s| s.set_filter(key, value)) == Some(true) {
            self.refetch();
        }
    }

    pub fn set_date_range(&self, from: String, to: String) {
        if self.state.try_update(|s| s.set_date_range(from, to)) == Some(true) {
            self.refetch();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<i32>, page: usize, total_pages: usize) -> ListResult<i32> {
        let total_items = items.len();
        ListResult {
            items,
            page,
            total_pages,
            total_items,
        }
    }

    #[test]
    fn loading_is_released_on_success_and_error() {
        let mut state = ListState::<i32>::default();

        let seq = state.begin_fetch();
        assert!(state.loading);
        assert!(state.apply_success(seq, page(vec![1, 2], 1, 1)));
        assert!(!state.loading);
        assert_eq!(state.items, vec![1, 2]);

        let seq = state.begin_fetch();
        state.apply_error(seq);
        assert!(!state.loading);
        assert!(state.items.is_empty());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = ListState::<i32>::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // The older response lands after the newer fetch was issued.
        assert!(!state.apply_success(first, page(vec![9], 1, 1)));
        assert!(state.items.is_empty());
        assert!(state.loading);

        assert!(state.apply_success(second, page(vec![1], 1, 1)));
        assert_eq!(state.items, vec![1]);
        assert!(!state.loading);
    }

    #[test]
    fn stale_error_does_not_clear_the_newer_fetch() {
        let mut state = ListState::<i32>::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        state.apply_error(first);
        assert!(state.loading);

        assert!(state.apply_success(second, page(vec![5], 1, 1)));
        assert_eq!(state.items, vec![5]);
    }

    #[test]
    fn non_page_filters_reset_to_first_page() {
        let mut state = ListState::<i32>::default();
        state.set_page(4);
        assert_eq!(state.page, 4);

        assert!(state.set_search("kaos".to_string()));
        assert_eq!(state.page, 1);

        state.set_page(3);
        assert!(state.set_filter("status", Some("unpaid".to_string())));
        assert_eq!(state.page, 1);

        state.set_page(3);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn half_open_date_range_defers_fetching() {
        let mut state = ListState::<i32>::default();
        assert!(!state.set_date_range("2025-01-01".to_string(), String::new()));
        assert!(state.set_date_range("2025-01-01".to_string(), "2025-01-31".to_string()));
        // Clearing both sides is a valid (unfiltered) fetch again.
        assert!(state.set_date_range(String::new(), String::new()));
    }

    #[test]
    fn query_omits_incomplete_range_and_blank_search() {
        let mut state = ListState::<i32>::default();
        state.search = "  ".to_string();
        state.date_from = "2025-01-01".to_string();
        let query = state.query();
        assert_eq!(query.search, None);
        assert_eq!(query.start_at, None);
        assert_eq!(query.end_at, None);

        state.date_to = "2025-01-31".to_string();
        state.search = "sepatu".to_string();
        let query = state.query();
        assert_eq!(query.search.as_deref(), Some("sepatu"));
        assert_eq!(query.start_at.as_deref(), Some("2025-01-01"));
    }
}
