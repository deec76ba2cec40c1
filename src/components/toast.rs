//! Fixed-position container rendering queued toasts.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Renders every queued toast; each dismisses on click or after its lifetime.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.with(|t| t.items.clone())
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::state::toast::TOAST_LIFETIME).await;
        toasts.update(|t| t.dismiss(id));
    });

    view! {
        <div class=toast.level.css_class() role="status" on:click=move |_| toasts.update(|t| t.dismiss(id))>
            {toast.message}
        </div>
    }
}
