//! Dashboard page showing the cached profile.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserProfile;
use crate::state::dashboard::{DashboardView, avatar_initial, logout_locally, mount_dashboard};
use crate::state::session::AppSession;

/// Dashboard page. Redirects to `/login` when no profile is stored.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let view_state = mount_dashboard(&session.storage);

    // Redirect once mounted so the router has finished the current navigation.
    if let DashboardView::Redirect(route) = view_state {
        let navigate = navigate.clone();
        Effect::new(move || {
            navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    }

    let on_logout = move |_| {
        let route = logout_locally(&session.storage);
        navigate(route.path(), NavigateOptions::default());
    };

    match view_state {
        DashboardView::Redirect(_) => ().into_any(),
        DashboardView::Profile(profile) => view! {
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Dashboard"</h1>
                    <button class="btn" on:click=on_logout>"Logout"</button>
                </header>
                <ProfileCard profile=profile/>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ProfileCard(profile: UserProfile) -> impl IntoView {
    let initial = avatar_initial(&profile.full_name);
    let bio = profile.bio_text().map(str::to_owned);

    view! {
        <section class="profile-card">
            <div class="profile-card__avatar">{initial}</div>
            <h2 class="profile-card__name">{profile.full_name}</h2>
            <p class="profile-card__designation">{profile.designation}</p>
            <dl class="profile-card__details">
                <dt>"Email"</dt>
                <dd>{profile.email}</dd>
                <dt>"Phone"</dt>
                <dd>{profile.phone_no}</dd>
            </dl>
        </section>
        {bio.map(|text| view! {
            <section class="profile-card">
                <h3>"About Me"</h3>
                <p>{text}</p>
            </section>
        })}
    }
}
