//! Labelled form inputs with an inline error line.

use leptos::prelude::*;

/// Red error text under a field; renders nothing when there is no message.
#[component]
pub fn FieldError(message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <span class="field-error">{move || message.get().unwrap_or_default()}</span>
        </Show>
    }
}

/// Plain text input bound to `value`.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id class="form-label">{label}</label>
            <input
                id=id
                class="form-input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError message=error/>
        </div>
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="form-field">
            <label for=id class="form-label">{label}</label>
            <div class="password-wrap">
                <input
                    id=id
                    class="form-input"
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="password-toggle"
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
            <FieldError message=error/>
        </div>
    }
}
