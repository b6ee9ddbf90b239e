use dioxus::prelude::*;
use types::auth::AuthUser;
use ui::breadcrumb::breadcrumbs;

use crate::auth::use_auth;
use crate::status::PageBoundary;
use crate::theme::{Theme, use_theme};
use crate::{ErrorBanner, Route};

/// Shell for every signed-in page: sidebar, header and the routed outlet.
#[component]
pub fn AppLayout() -> Element {
    let auth = use_auth();

    let Some(user) = auth.user() else {
        navigator().replace(Route::Login {});
        return rsx! {
            div { class: "loading", "Redirecting to login..." }
        };
    };

    rsx! {
        div { class: "app-layout",
            Sidebar { user: user.clone() }
            div { class: "app-main",
                Header { user }
                main { class: "main-content",
                    ErrorBanner {}
                    PageBoundary { Outlet::<Route> {} }
                }
            }
        }
    }
}

#[component]
fn Sidebar(user: AuthUser) -> Element {
    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                span { class: "sidebar-logo", "Admin Dashboard" }
            }
            nav { class: "sidebar-nav",
                NavLink { to: Route::Dashboard {}, "Dashboard" }
                NavLink { to: Route::Users {}, "Users" }
                NavLink { to: Route::Reports {}, "Reports" }
                NavLink { to: Route::Settings {}, "Settings" }
            }
            div { class: "sidebar-footer",
                div { class: "sidebar-user",
                    div { class: "sidebar-avatar", "{user.initial()}" }
                    div { class: "sidebar-user-info",
                        div { class: "sidebar-user-name", "{user.name}" }
                        div { class: "sidebar-user-role", "{user.role}" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[component]
fn Header(user: AuthUser) -> Element {
    rsx! {
        header { class: "app-header",
            Breadcrumbs {}
            div { class: "app-header-actions",
                ThemeToggle {}
                UserMenu { user }
            }
        }
    }
}

#[component]
fn Breadcrumbs() -> Element {
    let path = use_route::<Route>().to_string();
    let crumbs = breadcrumbs(&path);
    let last = crumbs.len().saturating_sub(1);

    rsx! {
        nav { aria_label: "breadcrumb",
            ol { class: "breadcrumbs",
                for (i, crumb) in crumbs.into_iter().enumerate() {
                    li { key: "{crumb.path}", class: "breadcrumb-item",
                        if i == last {
                            span { class: "breadcrumb-current", "{crumb.label}" }
                        } else {
                            Link {
                                class: "breadcrumb-link",
                                to: crumb.path.parse::<Route>().unwrap_or(Route::Dashboard {}),
                                "{crumb.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let label = match theme.get() {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };

    rsx! {
        button {
            class: "btn btn-ghost theme-toggle",
            title: label,
            aria_label: label,
            onclick: move |_| theme.toggle(),
            if theme.get() == Theme::Dark { "☀" } else { "☾" }
        }
    }
}

#[component]
fn UserMenu(user: AuthUser) -> Element {
    let mut auth = use_auth();
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "user-menu",
            button {
                class: "user-menu-trigger",
                aria_expanded: open(),
                onclick: move |_| open.toggle(),
                div { class: "sidebar-avatar", "{user.initial()}" }
            }
            if open() {
                div { class: "user-menu-dropdown",
                    div { class: "user-menu-profile",
                        div { class: "user-menu-name", "{user.name}" }
                        div { class: "text-muted text-sm", "{user.email}" }
                        span { class: "badge", "{user.role}" }
                    }
                    button {
                        class: "user-menu-item",
                        onclick: move |_| {
                            open.set(false);
                            auth.logout();
                        },
                        "Sign out"
                    }
                }
            }
        }
    }
}
