use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::{ErrorInfo, Route};

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    if auth.user().is_some() {
        navigator().replace(Route::Dashboard {});
    }

    let submit = move |event: FormEvent| {
        event.prevent_default();
        error.set(None);

        spawn(async move {
            match auth.login(email()).await {
                Ok(_) => {
                    navigator().replace(Route::Dashboard {});
                }
                Err(err) => {
                    let info = ErrorInfo::from_server_error(&err);
                    error.set(Some(info.root_cause().to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Admin Dashboard" }
                    p { class: "login-subtitle", "Sign in to your account" }
                }
                form { onsubmit: submit,
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            placeholder: "admin@example.com",
                            autocomplete: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "form-error", "{message}" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        disabled: auth.is_loading(),
                        if auth.is_loading() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
