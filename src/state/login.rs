//! Login form state and submission.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::form::SubmitPhase;
use super::session::Session;
use crate::net::error::AuthError;
use crate::net::transport::Transport;
use crate::net::types::Credentials;
use crate::routes::Route;
use crate::util::auth_storage::KeyValueStore;

pub const LOGIN_SUCCESS_TOAST: &str = "Login successful! Welcome back!";

/// Email/password inputs plus the submit lifecycle.
///
/// Only the browser's `type="email"` check applies; nothing is validated here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub phase: SubmitPhase,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.phase.on_edit();
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.phase.on_edit();
    }

    /// Start a submission and hand back the credentials to send.
    ///
    /// Returns `None` while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if !self.phase.begin() {
            return None;
        }
        self.error = None;
        Some(Credentials { email: self.email.clone(), password: self.password.clone() })
    }

    pub fn finish_submit(&mut self, result: &Result<Route, AuthError>) {
        self.phase.finish(result.is_ok());
        self.error = result.as_ref().err().map(ToString::to_string);
    }

    pub fn button_label(&self) -> &'static str {
        if self.phase.is_submitting() { "Signing In..." } else { "Sign In" }
    }
}

/// Log in, persist token and profile together, and route to the dashboard.
///
/// # Errors
///
/// Propagates the classified `AuthError`; nothing is persisted on failure.
pub async fn submit_login<T, S>(session: &Session<T, S>, credentials: &Credentials) -> Result<Route, AuthError>
where
    T: Transport,
    S: KeyValueStore,
{
    let response = session.api.login(credentials).await?;
    session.storage.save_login(&response);
    Ok(Route::Dashboard)
}
