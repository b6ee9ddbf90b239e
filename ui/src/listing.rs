//! Search-then-paginate state for a single listing screen.

use dioxus::prelude::*;

use crate::pagination::{self, PagingFacts};
use crate::provider::RecordProvider;

/// A record that can be matched against a free-text search query.
pub trait Searchable {
    /// The fields the search query is matched against.
    fn search_fields(&self) -> impl Iterator<Item = &str>;

    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// View state of one listing: page, page size and search query.
///
/// Every mutation that can invalidate the current page resets it to the
/// first page. Derived data is recomputed from scratch by [`ListView::derive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    current_page: usize,
    items_per_page: usize,
    search_query: String,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(pagination::DEFAULT_PAGE_SIZE)
    }
}

impl ListView {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            search_query: String::new(),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Replace the search query and go back to the first page.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    /// Jump to `page` without checking it against the page count.
    ///
    /// The pagination controls only offer reachable pages; anything else
    /// derives an empty page.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.items_per_page = size.max(1);
        self.current_page = 1;
    }

    /// Pull the current page back into `1..=max(1, total_pages)`.
    pub fn clamp_to(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    /// Records matching the search query, in their original order.
    pub fn filter<'a, R: Searchable>(&self, records: &'a [R]) -> Vec<&'a R> {
        let needle = self.search_query.trim().to_lowercase();

        if needle.is_empty() {
            return records.iter().collect();
        }

        records.iter().filter(|r| r.matches(&needle)).collect()
    }

    /// Filter, then paginate over the filtered count, then slice.
    pub fn derive<'a, R: Searchable>(&self, records: &'a [R]) -> Listing<'a, R> {
        let filtered = self.filter(records);
        let facts = pagination::compute(filtered.len(), self.items_per_page, self.current_page);
        let rows = facts.slice(&filtered).to_vec();

        Listing {
            rows,
            facts,
            matched: filtered.len(),
            total: records.len(),
        }
    }
}

/// The derived, render-ready state of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a, R> {
    /// Records on the current page.
    pub rows: Vec<&'a R>,
    pub facts: PagingFacts,
    /// Records matching the search query across all pages.
    pub matched: usize,
    /// Records before filtering.
    pub total: usize,
}

/// Listing state bound to a record provider.
///
/// When a refetch shrinks the collection below the current page, the page is
/// clamped back into range.
pub fn use_list_view<R>(provider: RecordProvider<R>, items_per_page: usize) -> Signal<ListView>
where
    R: Searchable + Clone + 'static,
{
    let mut view = use_signal(|| ListView::new(items_per_page));

    use_effect(move || {
        let records = provider.records();
        let (current_page, total_pages) = {
            let view = view.peek();
            let matched = view.filter(&records).len();
            (
                view.current_page(),
                pagination::total_pages(matched, view.items_per_page()),
            )
        };

        if current_page > total_pages.max(1) {
            tracing::debug!(current_page, total_pages, "clamping listing page");
            view.write().clamp_to(total_pages);
        }
    });

    view
}
