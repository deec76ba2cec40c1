//! Login page with email/password form and backend status badge.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::backend_status::BackendStatus;
use crate::routes::Route;
use crate::state::login::{LOGIN_SUCCESS_TOAST, LoginForm, submit_login};
use crate::state::session::AppSession;
use crate::state::toast::ToastState;

/// Login page. A successful sign-in persists the session and opens the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = submit_login(&session, &credentials).await;
            form.update(|f| f.finish_submit(&result));
            match result {
                Ok(route) => {
                    toasts.update(|t| {
                        t.success(LOGIN_SUCCESS_TOAST);
                    });
                    navigate(route.path(), NavigateOptions::default());
                }
                Err(err) => {
                    toasts.update(|t| {
                        t.error(err.to_string());
                    });
                }
            }
        });
    };

    let submitting = move || form.with(|f| f.phase.is_submitting());

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <header class="auth-card__header">
                    <h1>"Welcome Back"</h1>
                    <BackendStatus/>
                </header>

                <label class="auth-card__label">
                    "Email"
                    <input
                        class="auth-card__input"
                        type="email"
                        required=true
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    />
                </label>

                <label class="auth-card__label">
                    "Password"
                    <input
                        class="auth-card__input"
                        type="password"
                        required=true
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                    />
                </label>

                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="auth-card__error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=submitting>
                    {move || form.with(LoginForm::button_label)}
                </button>

                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=Route::Register.path() class="auth-card__link">"Register"</a>
                </p>
            </form>
        </div>
    }
}
