//! REST client for the auth service.
//!
//! Each operation is independent and stateless between calls. Sign-up and
//! login race the response headers against `ApiConfig::request_timeout`; the
//! health probe uses `health_timeout`; logout has no deadline.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified once into `AuthError` (see `net::error`) and logged
//! here. `check_backend_health` collapses every failure to `false`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use futures::future::{self, Either};

use super::error::{AuthError, AuthOperation, classify_failure, classify_response, malformed_body};
use super::transport::{ApiRequest, ResponseHead, Transport, TransportFailure};
use super::types::{Credentials, LoginResponse, RegistrationInput, ServerResponse};
use crate::config::ApiConfig;

/// Auth service client over an injected transport.
#[derive(Debug, Clone)]
pub struct AuthApi<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> AuthApi<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    /// Register a new account via `POST /userSignUp`.
    ///
    /// # Errors
    ///
    /// Returns `Timeout`, `NetworkUnreachable`, or `ServerRejected` (fallback
    /// message `"Registration failed"`).
    pub async fn sign_up(&self, input: &RegistrationInput) -> Result<ServerResponse, AuthError> {
        let op = AuthOperation::SignUp;
        let request = ApiRequest::post(self.config.endpoint(op.path()), Some(serde_json::json!(input)));
        let result = self
            .call(op, request, Some(self.config.request_timeout))
            .await
            .map(|(_, body)| body);
        log_failure(op, result)
    }

    /// Authenticate via `POST /userLogin`.
    ///
    /// # Errors
    ///
    /// Returns `Timeout`, `NetworkUnreachable`, or `ServerRejected` (fallback
    /// message `"Login failed"`, also used when a success body is not a
    /// `{token, userData}` object).
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        let op = AuthOperation::Login;
        let request = ApiRequest::post(self.config.endpoint(op.path()), Some(serde_json::json!(credentials)));
        let result = self
            .call(op, request, Some(self.config.request_timeout))
            .await
            .and_then(|(status, body)| serde_json::from_value::<LoginResponse>(body).map_err(|_| malformed_body(op, status)));
        log_failure(op, result)
    }

    /// End the server session via `POST /logout`, sending cookies.
    ///
    /// # Errors
    ///
    /// Returns `NetworkUnreachable` or `ServerRejected` (fallback message
    /// `"Logout failed"`). There is no deadline, so `Timeout` only occurs if
    /// the transport itself aborts.
    pub async fn logout(&self) -> Result<ServerResponse, AuthError> {
        let op = AuthOperation::Logout;
        let request = ApiRequest::post(self.config.endpoint(op.path()), None).with_credentials();
        let result = self.call(op, request, None).await.map(|(_, body)| body);
        log_failure(op, result)
    }

    /// Probe `GET /`; `true` only for a 2xx status within the health deadline.
    pub async fn check_backend_health(&self) -> bool {
        let request = ApiRequest::get(self.config.endpoint(AuthOperation::Health.path()));
        match self.dispatch(request, Some(self.config.health_timeout)).await {
            Ok(head) => head.is_success(),
            Err(_) => false,
        }
    }

    async fn call(
        &self,
        op: AuthOperation,
        request: ApiRequest,
        timeout: Option<Duration>,
    ) -> Result<(u16, serde_json::Value), AuthError> {
        let head = self.dispatch(request, timeout).await.map_err(classify_failure)?;
        let response = head.read().await.map_err(classify_failure)?;
        let body = classify_response(op, &response)?;
        Ok((response.status, body))
    }

    /// Send `request`, aborting it if no headers arrive within `timeout`.
    ///
    /// The deadline stops at the headers; reading the body is not timed.
    async fn dispatch(&self, request: ApiRequest, timeout: Option<Duration>) -> Result<ResponseHead, TransportFailure> {
        let send = self.transport.send(request);
        let Some(limit) = timeout else {
            return send.await;
        };
        match future::select(send, self.transport.sleep(limit)).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), in_flight)) => {
                // Dropping the pending send aborts the underlying fetch.
                drop(in_flight);
                Err(TransportFailure::Aborted)
            }
        }
    }
}

fn log_failure<V>(op: AuthOperation, result: Result<V, AuthError>) -> Result<V, AuthError> {
    if let Err(err) = &result {
        leptos::logging::error!("{} error: {err}", op.label());
    }
    result
}
