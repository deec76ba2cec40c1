//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
};
use crate::state::session::AppSession;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Provides the browser session and toast queue, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AppSession::browser());
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Title text="Portal"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
