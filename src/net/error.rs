//! Failure classification for auth API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every remote call fails with exactly one of three kinds. The decision is
//! made here, once, from the raw transport signal or the received response;
//! pages display `AuthError`'s `Display` text without inspecting it further.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

use super::transport::{RawResponse, TransportFailure};

/// Closed set of client-observable failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    NetworkUnreachable,
    ServerRejected,
}

/// Errors produced by `AuthApi` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The abort deadline fired before any response arrived.
    #[error("Request timeout. Please try again.")]
    Timeout,

    /// The request never reached the server (refused, DNS, CORS).
    #[error("Network error. Please check if the backend server is running.")]
    NetworkUnreachable { cause: String },

    /// The server answered with a non-success status or an unusable body.
    #[error("{message}")]
    ServerRejected { status: u16, message: String },
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout => ErrorKind::Timeout,
            Self::NetworkUnreachable { .. } => ErrorKind::NetworkUnreachable,
            Self::ServerRejected { .. } => ErrorKind::ServerRejected,
        }
    }
}

/// Remote auth operations, used for endpoint routing and fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    Health,
    SignUp,
    Login,
    Logout,
}

impl AuthOperation {
    pub fn path(self) -> &'static str {
        match self {
            Self::Health => "/",
            Self::SignUp => "/userSignUp",
            Self::Login => "/userLogin",
            Self::Logout => "/logout",
        }
    }

    /// Message used when the server rejects a call without a usable `message`.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Health => "Health check failed",
            Self::SignUp => "Registration failed",
            Self::Login => "Login failed",
            Self::Logout => "Logout failed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Health => "Health check",
            Self::SignUp => "Sign up",
            Self::Login => "Login",
            Self::Logout => "Logout",
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Map a raw transport failure to its error kind.
pub fn classify_failure(failure: TransportFailure) -> AuthError {
    match failure {
        TransportFailure::Aborted => AuthError::Timeout,
        TransportFailure::Unreachable(cause) => AuthError::NetworkUnreachable { cause },
    }
}

/// Split a received response into its JSON body or a `ServerRejected` error.
///
/// Empty or non-JSON bodies decode as `null`; the caller decides whether a
/// `null` success body is acceptable.
///
/// # Errors
///
/// Returns `AuthError::ServerRejected` for any non-2xx status, carrying the
/// body's non-empty `message` field or the operation's fallback text.
pub fn classify_response(op: AuthOperation, response: &RawResponse) -> Result<serde_json::Value, AuthError> {
    let body = serde_json::from_str::<serde_json::Value>(&response.body).unwrap_or(serde_json::Value::Null);
    if response.is_success() {
        return Ok(body);
    }
    let message = serde_json::from_value::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| op.fallback_message().to_owned());
    Err(AuthError::ServerRejected { status: response.status, message })
}

/// `ServerRejected` for a success response whose body does not fit the
/// expected shape.
pub fn malformed_body(op: AuthOperation, status: u16) -> AuthError {
    AuthError::ServerRejected { status, message: op.fallback_message().to_owned() }
}
