//! Badge showing whether the auth backend answered the health probe.

use leptos::prelude::*;

use crate::state::session::AppSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Health {
    Checking,
    Online,
    Offline,
}

/// Probes the backend once on mount.
#[component]
pub fn BackendStatus() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let health = RwSignal::new(Health::Checking);

    leptos::task::spawn_local(async move {
        let online = session.api.check_backend_health().await;
        health.set(if online { Health::Online } else { Health::Offline });
    });

    let status_class = move || match health.get() {
        Health::Checking => "backend-status backend-status--checking",
        Health::Online => "backend-status backend-status--online",
        Health::Offline => "backend-status backend-status--offline",
    };

    let status_label = move || match health.get() {
        Health::Checking => "Checking server...",
        Health::Online => "Server online",
        Health::Offline => "Server offline",
    };

    view! { <span class=status_class>{status_label}</span> }
}
