use std::collections::BTreeSet;

use dioxus::prelude::*;
use types::Book;
use ui::{
    DEFAULT_PAGE_SIZE, DataTablePagination, ErrorState, PageHeader, SearchInput, StatsCard,
    TableSkeleton, use_list_view, use_records,
};

const COLUMNS: usize = 5;

/// Reports page. The rows are books from the record API.
#[component]
pub fn Reports() -> Element {
    let books = use_records(api::list_reports);
    let mut view = use_list_view(books, DEFAULT_PAGE_SIZE);

    let records = books.records();
    let listing = view.read().derive(&records);
    let genres = records
        .iter()
        .map(|book| book.genre.as_str())
        .collect::<BTreeSet<_>>()
        .len();
    let (current_page, items_per_page, query) = {
        let view = view.read();
        (
            view.current_page(),
            view.items_per_page(),
            view.search_query().to_string(),
        )
    };

    rsx! {
        div {
            PageHeader {
                title: "Reports",
                subtitle: "Browse and search generated reports.",
                button {
                    class: "btn btn-secondary",
                    disabled: books.is_fetching(),
                    onclick: move |_| books.refetch(),
                    if books.is_fetching() { "Refreshing..." } else { "↻ Refresh" }
                }
            }

            div { class: "stats-grid",
                StatsCard { title: "Total Reports", value: books.total().to_string() }
                StatsCard { title: "Genres", value: genres.to_string() }
                StatsCard { title: "Matching", value: listing.matched.to_string() }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "All Reports" }
                    SearchInput {
                        value: query,
                        placeholder: "Search by title, author, genre...",
                        disabled: books.is_loading(),
                        on_change: move |q: String| view.write().set_search_query(q),
                    }
                }

                if books.is_loading() {
                    TableSkeleton { rows: 5, columns: COLUMNS }
                } else if let Some(message) = books.error() {
                    ErrorState {
                        title: "Failed to load reports",
                        message,
                        on_retry: move |_| books.refetch(),
                    }
                } else {
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Title" }
                                    th { "Author" }
                                    th { "Genre" }
                                    th { "Published" }
                                    th { "Publisher" }
                                }
                            }
                            tbody {
                                if listing.rows.is_empty() {
                                    tr {
                                        td { class: "empty-row", colspan: "{COLUMNS}", "No reports found." }
                                    }
                                }
                                for book in listing.rows.iter() {
                                    BookRow { key: "{book.id}", book: (*book).clone() }
                                }
                            }
                        }
                    }
                    DataTablePagination {
                        total_items: listing.matched,
                        items_per_page,
                        current_page,
                        on_page_change: move |page| view.write().go_to_page(page),
                        on_page_size_change: move |size| view.write().set_page_size(size),
                    }
                }
            }
        }
    }
}

#[component]
fn BookRow(book: Book) -> Element {
    let published = book.published.strftime("%b %d, %Y").to_string();

    rsx! {
        tr {
            td {
                div { class: "report-title", "{book.title}" }
                div { class: "text-muted text-sm", "ISBN {book.isbn}" }
            }
            td { "{book.author}" }
            td { span { class: "badge", "{book.genre}" } }
            td { "{published}" }
            td { "{book.publisher}" }
        }
    }
}
