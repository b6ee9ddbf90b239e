use dioxus::document::eval;
use dioxus::prelude::*;
use types::User;
use ui::{
    DEFAULT_PAGE_SIZE, DataTablePagination, ErrorState, PageHeader, SearchInput, StatsCard,
    TableSkeleton, use_list_view, use_records,
};

use crate::use_error;

const COLUMNS: usize = 5;

#[component]
pub fn Users() -> Element {
    let users = use_records(api::list_users);
    let mut view = use_list_view(users, DEFAULT_PAGE_SIZE);

    let records = users.records();
    let listing = view.read().derive(&records);
    let (current_page, items_per_page, query) = {
        let view = view.read();
        (
            view.current_page(),
            view.items_per_page(),
            view.search_query().to_string(),
        )
    };
    let match_note = match query.trim() {
        "" => "No filter applied".to_string(),
        needle => format!("Filtered by \"{needle}\""),
    };

    rsx! {
        div {
            PageHeader {
                title: "Users",
                subtitle: "Manage your users and their permissions.",
                button {
                    class: "btn btn-secondary",
                    disabled: users.is_fetching(),
                    onclick: move |_| users.refetch(),
                    if users.is_fetching() { "Refreshing..." } else { "↻ Refresh" }
                }
            }

            div { class: "stats-grid",
                StatsCard { title: "Total Users", value: users.total().to_string() }
                StatsCard {
                    title: "Matching",
                    value: listing.matched.to_string(),
                    note: match_note,
                }
                StatsCard { title: "Pages", value: listing.facts.total_pages.to_string() }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "All Users" }
                    SearchInput {
                        value: query.clone(),
                        placeholder: "Search users...",
                        disabled: users.is_loading(),
                        on_change: move |q: String| view.write().set_search_query(q),
                    }
                }

                if users.is_loading() {
                    TableSkeleton { rows: 5, columns: COLUMNS }
                } else if let Some(message) = users.error() {
                    ErrorState {
                        title: "Failed to load users",
                        message,
                        on_retry: move |_| users.refetch(),
                    }
                } else {
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Username" }
                                    th { "Website" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                if listing.rows.is_empty() {
                                    tr {
                                        td { class: "empty-row", colspan: "{COLUMNS}", "No users found." }
                                    }
                                }
                                for user in listing.rows.iter() {
                                    UserRow { key: "{user.uuid}", user: (*user).clone() }
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
fn UserRow(user: User) -> Element {
    let mut copied = use_signal(|| false);
    let mut error_state = use_error();
    let username = user.display_username().to_string();
    let has_username = !user.username.is_empty();

    let copy_email = {
        let email = user.email.clone();
        move |_| {
            let js = format!("await navigator.clipboard.writeText({email:?}); return true;");
            spawn(async move {
                match eval(&js).join::<bool>().await {
                    Ok(_) => copied.set(true),
                    Err(err) => error_state.set(format!("Could not copy email: {err}")),
                }
            });
        }
    };

    rsx! {
        tr {
            td {
                div { class: "user-cell",
                    img { class: "avatar", src: "{user.image}", alt: "" }
                    span { "{user.full_name()}" }
                }
            }
            td { "{user.email}" }
            td {
                if has_username {
                    span { class: "badge", "{username}" }
                } else {
                    span { class: "text-muted", "{username}" }
                }
            }
            td {
                a {
                    href: "{user.website}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{user.website}"
                }
            }
            td { class: "text-right row-actions",
                button {
                    class: "btn btn-ghost btn-sm",
                    title: if copied() { "Copied!" } else { "Copy email" },
                    onclick: copy_email,
                    if copied() { "✓" } else { "Copy email" }
                }
            }
        }
    }
}
