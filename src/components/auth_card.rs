//! Centered card shared by the login and registration pages.

use leptos::prelude::*;

#[component]
pub fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">{title}</h2>
                {children()}
            </div>
        </div>
    }
}
