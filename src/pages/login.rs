//! Login page: username/password form posting to the signin endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful signin persists the response body verbatim and moves on to
//! the welcome route. Every failure collapses to one generic message so the
//! form does not reveal which credential was wrong.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;

use crate::app::AppRoute;
use crate::components::auth_card::AuthCard;
use crate::config::AppConfig;
use crate::net::api::ApiError;
use crate::net::types::SigninRequest;
use crate::state::session::{Session, save_session};
use crate::util::storage::KeyValueStore;

pub const LOGIN_FAILED: &str = "Wrong username or password";

/// Send `credentials` through `send`, persist the session, and pick the next route.
///
/// # Errors
///
/// Returns `LOGIN_FAILED` if the request fails or the session cannot be stored.
pub async fn submit_signin<S, F, Fut>(
    credentials: SigninRequest,
    store: &S,
    send: F,
) -> Result<AppRoute, &'static str>
where
    S: KeyValueStore,
    F: FnOnce(SigninRequest) -> Fut,
    Fut: Future<Output = Result<Session, ApiError>>,
{
    let username = credentials.username.clone();
    let session = send(credentials).await.map_err(|e| {
        log::warn!("signin failed for {username}: {e}");
        LOGIN_FAILED
    })?;
    save_session(store, &session).map_err(|e| {
        log::warn!("signin succeeded for {username} but session was not saved: {e}");
        LOGIN_FAILED
    })?;
    log::info!("signed in as {username}");
    Ok(AppRoute::Welcome)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let credentials = SigninRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = submit_signin(
                    credentials,
                    &crate::util::storage::BrowserStorage,
                    |body| async move { crate::net::api::signin(&config, &body).await },
                )
                .await;
                busy.set(false);
                match result {
                    Ok(route) => navigate(route.path(), NavigateOptions::default()),
                    Err(message) => error.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, &config, &navigate);
            busy.set(false);
        }
    };

    view! {
        <AuthCard title="Login">
            <form class="auth-form" on:submit=on_submit>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="form-field">
                    <label for="username" class="sr-only">"Username"</label>
                    <input
                        id="username"
                        name="username"
                        class="form-input"
                        type="text"
                        required=true
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for="password" class="sr-only">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        class="form-input"
                        type="password"
                        required=true
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
            </form>
            <p class="auth-card__footer">
                "No account yet? "
                <A href=AppRoute::Register.path()>"Register"</A>
            </p>
        </AuthCard>
    }
}
