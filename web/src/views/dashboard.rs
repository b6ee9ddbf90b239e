use dioxus::prelude::*;
use jiff::Timestamp;
use types::dashboard::{Activity, ActivityKind};
use ui::{ErrorState, PageHeader, StatsCard};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let mut overview = use_resource(api::dashboard_overview);

    let body = match &*overview.read() {
        None => rsx! {
            div { class: "loading", "Loading dashboard..." }
        },
        Some(Err(err)) => rsx! {
            ErrorState {
                title: "Failed to load dashboard",
                message: err.to_string(),
                on_retry: move |_| overview.restart(),
            }
        },
        Some(Ok(overview)) => {
            let now = Timestamp::now();

            rsx! {
                div { class: "stats-grid",
                    for stat in overview.stats.iter() {
                        StatsCard {
                            key: "{stat.id}",
                            title: stat.title.clone(),
                            value: stat.value.clone(),
                            change: stat.change.clone(),
                            change_type: stat.change_type,
                        }
                    }
                }
                div { class: "grid grid-cols-2",
                    div { class: "card",
                        div { class: "card-header",
                            h2 { class: "card-title", "Recent Activity" }
                        }
                        ul { class: "activity-list",
                            for activity in overview.recent_activity.iter() {
                                ActivityItem { key: "{activity.id}", activity: activity.clone(), now }
                            }
                        }
                    }
                    QuickActions {}
                }
            }
        }
    };

    rsx! {
        div {
            PageHeader {
                title: "Dashboard",
                subtitle: "Welcome back! Here's what's happening with your business today.",
            }
            {body}
        }
    }
}

#[component]
fn ActivityItem(activity: Activity, now: Timestamp) -> Element {
    let icon = match activity.kind {
        ActivityKind::User => "👤",
        ActivityKind::Report => "📄",
        ActivityKind::System => "⚙",
    };

    rsx! {
        li { class: "activity-item",
            span { class: "activity-icon", "{icon}" }
            div {
                p { class: "activity-message", "{activity.message}" }
                p { class: "text-muted text-sm", {activity.ago(now)} }
            }
        }
    }
}

#[component]
fn QuickActions() -> Element {
    let nav = navigator();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Quick Actions" }
            }
            div { class: "quick-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        nav.push(Route::Users {});
                    },
                    "Add New User"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        nav.push(Route::Reports {});
                    },
                    "Generate Report"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        nav.push(Route::Settings {});
                    },
                    "View Settings"
                }
            }
        }
    }
}
