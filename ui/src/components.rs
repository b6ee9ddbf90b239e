use dioxus::prelude::*;
use types::dashboard::ChangeType;

#[component]
pub fn PageHeader(title: String, subtitle: String, #[props(default)] children: Element) -> Element {
    rsx! {
        div { class: "page-header",
            div { class: "page-header-content",
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }
            div { class: "page-header-actions", {children} }
        }
    }
}

/// A single headline metric with an optional month-over-month change.
#[component]
pub fn StatsCard(
    title: String,
    value: String,
    #[props(default)] change: Option<String>,
    #[props(default)] change_type: ChangeType,
    #[props(default)] note: Option<String>,
) -> Element {
    let (trend_class, trend_icon) = match change_type {
        ChangeType::Positive => ("text-positive", Some("▲")),
        ChangeType::Negative => ("text-negative", Some("▼")),
        ChangeType::Neutral => ("text-muted", None),
    };

    rsx! {
        div { class: "card stats-card",
            div { class: "stats-card-header",
                span { class: "stats-card-title", "{title}" }
                if let Some(icon) = trend_icon {
                    span { class: "stats-card-trend {trend_class}", "{icon}" }
                }
            }
            div { class: "stats-card-value", "{value}" }
            if let Some(change) = change {
                p { class: "stats-card-change {trend_class}", "{change} from last month" }
            }
            if let Some(note) = note {
                p { class: "stats-card-change text-muted", "{note}" }
            }
        }
    }
}

/// Inline failure panel with an optional retry action.
#[component]
pub fn ErrorState(
    #[props(default)] title: Option<String>,
    #[props(default)] message: Option<String>,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    let title = title.unwrap_or_else(|| "Something went wrong".to_string());

    rsx! {
        div { class: "error-state",
            span { class: "error-state-icon", "⚠" }
            div { class: "error-state-body",
                h2 { class: "error-state-title", "{title}" }
                if let Some(message) = message {
                    p { class: "text-muted text-sm", "{message}" }
                }
            }
            if let Some(on_retry) = on_retry {
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_retry.call(()),
                    "↻ Retry"
                }
            }
        }
    }
}

/// Placeholder rows shown while a table's first fetch is in flight.
#[component]
pub fn TableSkeleton(
    #[props(default = 5)] rows: usize,
    #[props(default = 4)] columns: usize,
) -> Element {
    rsx! {
        div { class: "table-skeleton", aria_busy: "true",
            for row in 0..rows {
                div { key: "{row}", class: "table-skeleton-row",
                    for column in 0..columns {
                        div { key: "{column}", class: "skeleton-cell" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SearchInput(
    value: String,
    on_change: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "search-input",
            span { class: "search-input-icon", "⌕" }
            input {
                class: "form-input",
                r#type: "search",
                placeholder: "{placeholder}",
                disabled,
                value: "{value}",
                oninput: move |e| on_change.call(e.value()),
            }
        }
    }
}
