//! Pure pagination math and page-number shaping for listing views.

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page counts up to this are listed in full, without an ellipsis.
const MAX_LISTED_PAGES: usize = 7;

/// Leading pages listed while the current page is near the start.
const LEADING_PAGES: usize = 4;

/// An entry in the page-number sequence rendered by the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Page(usize),
    /// An elided run of pages.
    Ellipsis,
}

/// Everything the controls need to know about one page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingFacts {
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub can_go_next: bool,
    pub can_go_previous: bool,
    pub page_numbers: Vec<PageItem>,
}

impl PagingFacts {
    /// Whether pagination controls should render at all.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// The `[start_index, end_index)` window of `items`.
    ///
    /// Out-of-range pages yield an empty slice rather than panicking.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(self.start_index..self.end_index).unwrap_or(&[])
    }
}

/// Compute the number of pages for a list.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1))
}

/// Derive the paging facts for `current_page` (1-based).
///
/// `items_per_page` and `current_page` are clamped to at least 1. The current
/// page has no upper bound: a page past the end produces `can_go_next = false`
/// and an empty window, which callers gate on rather than treat as an error.
pub fn compute(total_items: usize, items_per_page: usize, current_page: usize) -> PagingFacts {
    let per_page = items_per_page.max(1);
    let current_page = current_page.max(1);
    let total_pages = total_pages(total_items, per_page);

    let start_index = (current_page - 1).saturating_mul(per_page);
    let end_index = start_index.saturating_add(per_page).min(total_items);

    PagingFacts {
        total_pages,
        start_index,
        end_index,
        can_go_next: current_page < total_pages,
        can_go_previous: current_page > 1,
        page_numbers: page_numbers(current_page, total_pages),
    }
}

fn page_numbers(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total_pages <= 1 {
        return Vec::new();
    }

    if total_pages <= MAX_LISTED_PAGES {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page <= LEADING_PAGES {
        (1..=LEADING_PAGES)
            .map(Page)
            .chain([Ellipsis, Page(total_pages)])
            .collect()
    } else if current_page >= total_pages - 3 {
        [Page(1), Ellipsis]
            .into_iter()
            .chain((total_pages - 3..=total_pages).map(Page))
            .collect()
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Ellipsis,
            Page(total_pages),
        ]
    }
}

/// The 1-based first and last item numbers shown on `current_page`, as in
/// "Showing 11 to 20 of 23 results". `None` when there is nothing to show.
pub fn range_summary(
    total_items: usize,
    items_per_page: usize,
    current_page: usize,
) -> Option<(usize, usize)> {
    if total_items == 0 {
        return None;
    }

    let per_page = items_per_page.max(1);
    let current_page = current_page.max(1);
    let first = (current_page - 1).saturating_mul(per_page).saturating_add(1);
    let last = current_page.saturating_mul(per_page).min(total_items);

    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn total_pages_is_ceiling_division() {
        for total_items in 0..=120 {
            for per_page in 1..=15 {
                let facts = compute(total_items, per_page, 1);
                let want = (total_items + per_page - 1) / per_page;

                assert_eq!(facts.total_pages, want, "{total_items} items / {per_page}");
                assert_eq!(facts.total_pages == 0, total_items == 0);
            }
        }
    }

    #[test]
    fn window_never_exceeds_page_size_and_last_page_holds_remainder() {
        for total_items in 1..=60 {
            for per_page in 1..=12 {
                let total_pages = total_pages(total_items, per_page);

                for page in 1..=total_pages {
                    let facts = compute(total_items, per_page, page);
                    assert!(facts.end_index - facts.start_index <= per_page);
                }

                let last = compute(total_items, per_page, total_pages);
                assert_eq!(
                    last.end_index - last.start_index,
                    total_items - (total_pages - 1) * per_page
                );
            }
        }
    }

    #[test]
    fn single_page_has_no_controls() {
        let facts = compute(7, 10, 1);

        assert_eq!(facts.total_pages, 1);
        assert!(facts.page_numbers.is_empty());
        assert!(!facts.shows_controls());
        assert!(!facts.can_go_next);
        assert!(!facts.can_go_previous);
    }

    #[test]
    fn small_page_counts_are_listed_in_full() {
        let facts = compute(70, 10, 3);
        assert_eq!(facts.page_numbers, (1..=7).map(Page).collect::<Vec<_>>());
    }

    #[test]
    fn shows_leading_pages_near_start() {
        let want = [Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)];

        for current in 1..=4 {
            let got = compute(100, 10, current);
            assert_eq!(got.page_numbers, want, "current page {current}");
        }
    }

    #[test]
    fn shows_trailing_pages_near_end() {
        let want = [Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)];

        for current in 7..=10 {
            let got = compute(100, 10, current);
            assert_eq!(got.page_numbers, want, "current page {current}");
        }
    }

    #[test]
    fn shows_neighbours_in_the_middle() {
        let got = compute(100, 10, 5);
        assert_eq!(
            got.page_numbers,
            [Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );

        let got = compute(100, 10, 6);
        assert_eq!(
            got.page_numbers,
            [Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn page_numbers_shape_holds_for_every_page() {
        for total_pages in 0..=40 {
            for current in 1..=total_pages.max(1) {
                let numbers = compute(total_pages * 5, 5, current).page_numbers;

                assert!(numbers.len() <= 7);
                assert!(
                    !numbers.windows(2).any(|w| w == [Ellipsis, Ellipsis]),
                    "adjacent ellipses at {current}/{total_pages}: {numbers:?}"
                );

                if numbers.contains(&Ellipsis) {
                    assert_eq!(numbers.first(), Some(&Page(1)));
                    assert_eq!(numbers.last(), Some(&Page(total_pages)));
                }

                if total_pages > 1 {
                    assert!(numbers.contains(&Page(current)));
                }
            }
        }
    }

    #[test]
    fn past_the_end_is_consistent_not_an_error() {
        let facts = compute(23, 10, 9);

        assert_eq!(facts.total_pages, 3);
        assert!(!facts.can_go_next);
        assert!(facts.can_go_previous);

        let items: Vec<u32> = (0..23).collect();
        assert!(facts.slice(&items).is_empty());
    }

    #[test]
    fn degenerate_inputs_are_clamped() {
        assert_eq!(compute(5, 0, 1), compute(5, 1, 1));
        assert_eq!(compute(5, 2, 0), compute(5, 2, 1));
    }

    #[test]
    fn compute_is_pure() {
        assert_eq!(compute(230, 20, 6), compute(230, 20, 6));
    }

    #[test]
    fn second_page_of_twenty_three() {
        let items: Vec<u32> = (0..23).collect();
        let facts = compute(items.len(), 10, 2);

        assert_eq!(facts.slice(&items), &items[10..20]);
        assert_eq!(facts.total_pages, 3);
        assert!(facts.can_go_next);
        assert!(facts.can_go_previous);
        assert_eq!(facts.page_numbers, [Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn empty_listing() {
        let items: Vec<u32> = Vec::new();
        let facts = compute(0, 10, 1);

        assert_eq!(facts.total_pages, 0);
        assert!(!facts.shows_controls());
        assert!(facts.slice(&items).is_empty());
    }

    #[test]
    fn range_summary_matches_window() {
        assert_eq!(range_summary(23, 10, 1), Some((1, 10)));
        assert_eq!(range_summary(23, 10, 3), Some((21, 23)));
        assert_eq!(range_summary(0, 10, 1), None);
    }
}
