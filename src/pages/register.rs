//! Registration page with per-field validation messages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::Route;
use crate::state::register::{REGISTER_SUCCESS_TOAST, RegisterField, RegisterForm, submit_registration};
use crate::state::session::AppSession;
use crate::state::toast::ToastState;

/// Registration page. Success routes to login without signing in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(RegisterForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = form.try_update(RegisterForm::begin_submit).flatten() else {
            return;
        };

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = submit_registration(&session, &input).await;
            form.update(|f| f.finish_submit(&result));
            match result {
                Ok(route) => {
                    toasts.update(|t| {
                        t.success(REGISTER_SUCCESS_TOAST);
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

    let password_type = move || if form.with(|f| f.show_password) { "text" } else { "password" };
    let toggle_label = move || if form.with(|f| f.show_password) { "Hide" } else { "Show" };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <header class="auth-card__header">
                    <h1>"Create Account"</h1>
                </header>

                <FormField form=form field=RegisterField::FullName label="Full Name" input_type="text"/>
                <FormField form=form field=RegisterField::Email label="Email" input_type="email"/>
                <FormField form=form field=RegisterField::PhoneNo label="Phone Number" input_type="tel"/>
                <FormField form=form field=RegisterField::Designation label="Designation" input_type="text"/>

                <label class="auth-card__label">
                    "Password"
                    <span class="auth-card__password">
                        <input
                            class="auth-card__input"
                            type=password_type
                            prop:value=move || form.with(|f| f.field(RegisterField::Password).to_owned())
                            on:input=move |ev| form.update(|f| f.set_field(RegisterField::Password, event_target_value(&ev)))
                        />
                        <button
                            class="btn btn--ghost"
                            type="button"
                            on:click=move |_| form.update(RegisterForm::toggle_password)
                        >
                            {toggle_label}
                        </button>
                    </span>
                    <FieldError form=form field=RegisterField::Password/>
                </label>

                <label class="auth-card__label">
                    "Bio"
                    <textarea
                        class="auth-card__input"
                        rows="3"
                        prop:value=move || form.with(|f| f.field(RegisterField::Bio).to_owned())
                        on:input=move |ev| form.update(|f| f.set_field(RegisterField::Bio, event_target_value(&ev)))
                    ></textarea>
                </label>

                <Show when=move || form.with(|f| f.api_error.is_some())>
                    <p class="auth-card__error">{move || form.with(|f| f.api_error.clone().unwrap_or_default())}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.phase.is_submitting())>
                    {move || form.with(RegisterForm::button_label)}
                </button>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=Route::Login.path() class="auth-card__link">"Login"</a>
                </p>
            </form>
        </div>
    }
}

/// Labelled single-line input bound to one registration field.
#[component]
fn FormField(form: RwSignal<RegisterForm>, field: RegisterField, label: &'static str, input_type: &'static str) -> impl IntoView {
    view! {
        <label class="auth-card__label">
            {label}
            <input
                class="auth-card__input"
                type=input_type
                prop:value=move || form.with(|f| f.field(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
            <FieldError form=form field=field/>
        </label>
    }
}

#[component]
fn FieldError(form: RwSignal<RegisterForm>, field: RegisterField) -> impl IntoView {
    move || form.with(|f| f.errors.get(field)).map(|message| view! { <span class="auth-card__field-error">{message}</span> })
}
