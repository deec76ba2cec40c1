//! Dashboard access check and local logout.
//!
//! Access depends only on a cached profile being present; the token is never
//! checked and no request is made on mount.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::UserProfile;
use crate::routes::Route;
use crate::util::auth_storage::{AuthStorage, KeyValueStore};

/// What the dashboard shows after reading storage on mount.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardView {
    Redirect(Route),
    Profile(UserProfile),
}

pub fn mount_dashboard<S: KeyValueStore>(storage: &AuthStorage<S>) -> DashboardView {
    match storage.user_data::<UserProfile>() {
        Some(profile) => DashboardView::Profile(profile),
        None => DashboardView::Redirect(Route::Login),
    }
}

/// Clear persisted auth data and route to login.
///
/// The server session is left alone; see `AuthApi::logout` for the remote call.
pub fn logout_locally<S: KeyValueStore>(storage: &AuthStorage<S>) -> Route {
    storage.clear_auth_data();
    Route::Login
}

/// Uppercased first character of the name, for the avatar badge.
pub fn avatar_initial(full_name: &str) -> String {
    full_name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}
