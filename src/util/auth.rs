//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes that need a session restore it from storage on mount and redirect
//! to login when none is found.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::AppRoute;
use crate::state::auth::AuthState;
use crate::state::session::load_session;
use crate::util::storage::BrowserStorage;

/// True once the session has been read and none was found.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// Read the persisted session into `auth`. Call while the route is mounting,
/// before `install_unauth_redirect`, so the guard never sees stale state.
pub fn restore_session(auth: RwSignal<AuthState>) {
    let session = load_session(&BrowserStorage);
    log::debug!("restored session present: {}", session.is_some());
    auth.set(AuthState::restored(session));
}

/// Send the browser to login if `state` has no session. Returns whether it did.
pub fn redirect_if_unauth<F>(state: &AuthState, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    let redirect = should_redirect_unauth(state);
    if redirect {
        navigate(AppRoute::Login.path(), NavigateOptions::default());
    }
    redirect
}

/// Redirect to login whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        redirect_if_unauth(&auth.get(), &navigate);
    });
}
