use dioxus::prelude::*;

use crate::pagination::{PAGE_SIZE_OPTIONS, PageItem, compute, range_summary};

/// Page navigation and page-size selection for a table.
///
/// Renders nothing when everything fits on one page. Previous/next are
/// disabled at the edges, so `on_page_change` only ever receives reachable
/// pages.
#[component]
pub fn DataTablePagination(
    total_items: usize,
    items_per_page: usize,
    current_page: usize,
    on_page_change: EventHandler<usize>,
    #[props(default)] on_page_size_change: Option<EventHandler<usize>>,
    #[props(default = PAGE_SIZE_OPTIONS.to_vec())] page_size_options: Vec<usize>,
    #[props(default)] class: String,
) -> Element {
    let facts = compute(total_items, items_per_page, current_page);

    if !facts.shows_controls() {
        return rsx! {};
    }

    let summary = match range_summary(total_items, items_per_page, current_page) {
        Some((first, last)) => format!("Showing {first} to {last} of {total_items} results"),
        None => "No results found".to_string(),
    };
    let can_go_previous = facts.can_go_previous;
    let can_go_next = facts.can_go_next;

    rsx! {
        div { class: "data-table-pagination {class}",
            div { class: "pagination-info",
                span { class: "text-muted text-sm", "{summary}" }
                if let Some(on_page_size_change) = on_page_size_change {
                    div { class: "page-size",
                        label { class: "text-muted text-sm", r#for: "page-size", "Show:" }
                        select {
                            id: "page-size",
                            class: "form-input form-input-sm",
                            value: "{items_per_page}",
                            onchange: move |e| {
                                if let Ok(size) = e.value().parse() {
                                    on_page_size_change.call(size);
                                }
                            },
                            for size in page_size_options {
                                option {
                                    key: "{size}",
                                    value: "{size}",
                                    selected: size == items_per_page,
                                    "{size}"
                                }
                            }
                        }
                    }
                }
            }
            nav { class: "pagination", aria_label: "pagination",
                button {
                    class: "pagination-link",
                    disabled: !can_go_previous,
                    onclick: move |_| {
                        if can_go_previous {
                            on_page_change.call(current_page - 1);
                        }
                    },
                    "‹ Previous"
                }
                for (index, item) in facts.page_numbers.into_iter().enumerate() {
                    {
                        match item {
                            PageItem::Ellipsis => rsx! {
                                span { key: "{index}", class: "pagination-ellipsis", "…" }
                            },
                            PageItem::Page(page) => rsx! {
                                button {
                                    key: "{index}",
                                    class: if page == current_page { "pagination-link active" } else { "pagination-link" },
                                    aria_current: if page == current_page { "page" },
                                    onclick: move |_| on_page_change.call(page),
                                    "{page}"
                                }
                            },
                        }
                    }
                }
                button {
                    class: "pagination-link",
                    disabled: !can_go_next,
                    onclick: move |_| {
                        if can_go_next {
                            on_page_change.call(current_page + 1);
                        }
                    },
                    "Next ›"
                }
            }
        }
    }
}
