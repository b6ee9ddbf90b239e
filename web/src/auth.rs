use dioxus::prelude::*;
use types::auth::AuthUser;

use crate::Route;

/// The signed-in user, shared through context.
///
/// Seeded from the server on first render. Signing out only clears the
/// client-side state.
#[derive(Clone, Copy)]
pub struct AuthState {
    user: Signal<Option<AuthUser>>,
    loading: Signal<bool>,
}

impl AuthState {
    pub fn new(user: Option<AuthUser>) -> Self {
        Self {
            user: Signal::new(user),
            loading: Signal::new(false),
        }
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.user.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        (self.loading)()
    }

    pub async fn login(mut self, email: String) -> Result<AuthUser, ServerFnError> {
        self.loading.set(true);
        let result = api::login(email).await;
        self.loading.set(false);

        let user = result?;
        tracing::info!(email = %user.email, "signed in");
        self.user.set(Some(user.clone()));

        Ok(user)
    }

    pub fn logout(&mut self) {
        self.user.set(None);
        navigator().replace(Route::Login {});
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
