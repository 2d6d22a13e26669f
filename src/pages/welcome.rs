//! Welcome page greeting the signed-in user.
//!
//! Restores the session from storage on mount. Without one, the unauth
//! redirect sends the browser back to login before any greeting renders.

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::clear_session;
use crate::util::auth::{install_unauth_redirect, restore_session};
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Greeting text for the current auth state, once a session is known.
pub fn greeting(state: &AuthState) -> Option<String> {
    if state.loading {
        return None;
    }
    state.display_name().map(|name| format!("Welcome {name}"))
}

/// Drop the persisted session and return the signed-out state.
///
/// Setting the returned state triggers the unauth redirect to login.
pub fn logout<S: KeyValueStore>(store: &S) -> AuthState {
    clear_session(store);
    log::info!("signed out");
    AuthState::restored(None)
}

#[component]
pub fn WelcomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    restore_session(auth);
    install_unauth_redirect(auth, navigate);

    let on_logout = move |_| auth.set(logout(&BrowserStorage));

    view! {
        <Show when=move || greeting(&auth.get()).is_some()>
            <div class="welcome-page">
                <p class="welcome-greeting">{move || greeting(&auth.get()).unwrap_or_default()}</p>
                <button class="form-button" type="button" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </Show>
    }
}
