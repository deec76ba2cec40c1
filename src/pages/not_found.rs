//! Fallback for unknown paths.

use leptos::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Page not found"</h1>
                <a href=Route::Login.path() class="auth-card__link">"Back to login"</a>
            </div>
        </div>
    }
}
