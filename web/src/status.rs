use dioxus::document::eval;
use dioxus::prelude::*;

const UNEXPECTED: &str = "An unexpected error occurred.";

/// Text shown by [`ErrorFallback`], falling back to a generic line when the
/// failure carried no message.
fn fallback_message(error: &str) -> &str {
    match error.trim() {
        "" => UNEXPECTED,
        message => message,
    }
}

/// Full-page card rendered when a page fails to render.
#[component]
pub fn ErrorFallback(#[props(default)] error: String) -> Element {
    let message = fallback_message(&error);

    rsx! {
        div { class: "error-fallback",
            div { class: "card error-fallback-card",
                h1 { class: "error-fallback-title", "⚠ Something went wrong" }
                p { class: "text-muted text-sm", "{message}" }
                p { class: "text-muted text-sm",
                    "You might be offline. Please check your internet connection."
                }
                div { class: "error-fallback-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            eval("window.location.reload();");
                        },
                        "Reload"
                    }
                    a { class: "btn btn-secondary", href: "/", "Go Home" }
                }
            }
        }
    }
}

/// Wrap routed pages so a render failure shows [`ErrorFallback`] instead of
/// tearing down the shell.
#[component]
pub fn PageBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                let error = errors.error().map(|error| error.to_string()).unwrap_or_default();
                tracing::error!(%error, "unhandled render error");
                rsx! { ErrorFallback { error } }
            },
            {children}
        }
    }
}

/// "Offline Mode" banner, shown while the browser reports no connection.
#[component]
pub fn NetworkStatus() -> Element {
    let mut online = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            let mut events = eval(
                r#"dioxus.send(navigator.onLine);
                window.addEventListener("online", () => dioxus.send(true));
                window.addEventListener("offline", () => dioxus.send(false));
                await new Promise(() => {});"#,
            );

            while let Ok(status) = events.recv::<bool>().await {
                if status != *online.peek() {
                    tracing::info!(online = status, "network status changed");
                    online.set(status);
                }
            }
        });
    });

    if online() {
        return rsx! {};
    }

    rsx! {
        div { class: "network-status", role: "alert",
            strong { "Offline Mode" }
            span { "You're offline. Some features may not work." }
        }
    }
}
