use dioxus::prelude::*;

mod auth;
mod layout;
mod status;
mod theme;
mod views;

use auth::AuthState;
use layout::AppLayout;
use status::NetworkStatus;
use views::{Dashboard, Login, Reports, Settings, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/reports")]
        Reports {},
        #[route("/settings")]
        Settings {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init().await?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ErrorState(Signal::new(None)));
    theme::use_theme_provider();

    let current_user = use_server_future(api::get_current_user)?;
    use_context_provider(|| {
        let user = match &*current_user.peek() {
            Some(Ok(user)) => user.clone(),
            _ => None,
        };
        AuthState::new(user)
    });

    rsx! {
        document::Title { "Admin Dashboard" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        NetworkStatus {}
        Router::<Route> {}
    }
}

/// Structured error information for display
#[derive(Clone, Debug, Default)]
pub struct ErrorInfo {
    pub message: String,
    pub chain: Vec<String>,
}

impl ErrorInfo {
    pub fn from_server_error(err: &ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError { message, .. } => Self::from_message(message),
            other => Self::from_message(&other.to_string()),
        }
    }

    /// The innermost cause, which names what the user got wrong.
    pub fn root_cause(&self) -> &str {
        self.chain.last().unwrap_or(&self.message)
    }

    /// Split an eyre report into its headline and causes.
    ///
    /// Reports render as the outermost message, then a `Caused by:` section
    /// with one cause per line, numbered when there is more than one.
    fn from_message(message: &str) -> Self {
        let mut sections = message.splitn(2, "\n\nCaused by:");
        let headline = sections.next().unwrap_or_default().trim().to_string();

        let mut chain = vec![headline.clone()];
        if let Some(causes) = sections.next() {
            chain.extend(
                causes
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(|line| match line.split_once(": ") {
                        Some((n, cause)) if n.chars().all(|c| c.is_ascii_digit()) => cause,
                        _ => line,
                    })
                    .map(String::from),
            );
        }

        Self {
            message: headline,
            chain,
        }
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    pub fn set(&mut self, error: impl Into<String>) {
        let msg = error.into();
        tracing::warn!(%msg, "action failed");
        self.0.set(Some(ErrorInfo::from_message(&msg)));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_error();
    let error = error_state.0.read();

    let Some(err) = error.as_ref() else {
        return rsx! {};
    };

    rsx! {
        div { class: "error-banner",
            div { class: "error-banner-header",
                span { class: "error-banner-message", "{err.message}" }
                button {
                    class: "error-banner-close",
                    onclick: move |_| error_state.clear(),
                    "×"
                }
            }
            if err.chain.len() > 1 {
                ol { class: "error-chain-list",
                    for (i, msg) in err.chain.iter().enumerate().skip(1) {
                        li { key: "{i}", class: "error-chain-item", "{msg}" }
                    }
                }
            }
        }
    }
}
