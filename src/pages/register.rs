//! Registration page: validated signup form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field rules run before any request is made; only a fully valid form
//! reaches the signup endpoint. After the first submit the rules re-run on
//! every edit. Server and transport errors are shown above
//! the form and leave it editable for another attempt.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppRoute;
use crate::components::auth_card::AuthCard;
use crate::components::form_field::{PasswordField, TextField};
use crate::config::AppConfig;
use crate::net::api::ApiError;
use crate::net::types::SignupRequest;
use crate::util::validation::{FieldErrors, RegistrationInput, validate_registration};

/// Result of one registration submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The request failed; carries the text to show.
    Failed(String),
    /// Account created; the page returns to login.
    Registered,
}

/// Field messages to show while the user edits the form.
///
/// Nothing is shown before the first submit; afterwards every edit re-runs
/// the rules so fixed fields clear and newly broken ones appear.
pub fn live_field_errors(attempted: bool, input: &RegistrationInput) -> FieldErrors {
    if !attempted {
        return FieldErrors::default();
    }
    validate_registration(input).err().unwrap_or_default()
}

/// Validate `input` and, if it passes, send it through `send`.
pub async fn submit_registration<F, Fut>(input: &RegistrationInput, send: F) -> RegisterOutcome
where
    F: FnOnce(SignupRequest) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let request = match validate_registration(input) {
        Ok(request) => request,
        Err(errors) => return RegisterOutcome::Invalid(errors),
    };
    let username = request.username.clone();
    match send(request).await {
        Ok(()) => {
            log::info!("registered account {username}");
            RegisterOutcome::Registered
        }
        Err(e) => {
            log::warn!("signup failed for {username}: {e}");
            RegisterOutcome::Failed(e.to_string())
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let fullname = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let form_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let attempted = RwSignal::new(false);

    let read_input = move || RegistrationInput {
        fullname: fullname.get(),
        username: username.get(),
        password: password.get(),
        confirm_password: confirm_password.get(),
    };

    Effect::new(move || {
        let input = read_input();
        errors.set(live_field_errors(attempted.get(), &input));
    });

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = untrack(read_input);
        attempted.set(true);
        busy.set(true);
        form_error.set(None);

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                let outcome = submit_registration(&input, |body| async move {
                    crate::net::api::signup(&config, &body).await
                })
                .await;
                busy.set(false);
                match outcome {
                    RegisterOutcome::Invalid(field_errors) => errors.set(field_errors),
                    RegisterOutcome::Failed(message) => {
                        errors.set(FieldErrors::default());
                        form_error.set(Some(message));
                    }
                    RegisterOutcome::Registered => {
                        navigate(AppRoute::Login.path(), NavigateOptions::default());
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, &navigate_submit);
            errors.set(live_field_errors(true, &input));
            busy.set(false);
        }
    };

    let on_back = move |_| navigate(AppRoute::Login.path(), NavigateOptions::default());

    view! {
        <AuthCard title="Register">
            <form class="auth-form" on:submit=on_submit>
                <Show when=move || form_error.get().is_some()>
                    <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <TextField
                    id="fullname"
                    label="Fullname"
                    placeholder="Type your fullname here..."
                    value=fullname
                    error=Signal::derive(move || errors.get().fullname)
                />
                <TextField
                    id="username"
                    label="Username"
                    placeholder="Type your username here..."
                    value=username
                    error=Signal::derive(move || errors.get().username)
                />
                <PasswordField
                    id="password"
                    label="Password"
                    placeholder="Type your password here..."
                    value=password
                    error=Signal::derive(move || errors.get().password)
                />
                <PasswordField
                    id="confirmPassword"
                    label="Confirm Password"
                    placeholder="Confirm your password here..."
                    value=confirm_password
                    error=Signal::derive(move || errors.get().confirm_password)
                />
                <button class="form-button" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
                <button class="form-button form-button--secondary" type="button" on:click=on_back>
                    "Back to Login"
                </button>
            </form>
        </AuthCard>
    }
}
