//! Injected auth dependencies shared by all pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `AppSession` via context. Controllers are generic over
//! the transport and store so tests can run them against doubles.

use crate::config::ApiConfig;
use crate::net::api::AuthApi;
use crate::net::transport::{FetchTransport, Transport};
use crate::util::auth_storage::{AuthStorage, BrowserStorage, KeyValueStore};

/// The auth client and persisted auth state a page controller works with.
#[derive(Debug, Clone)]
pub struct Session<T, S> {
    pub api: AuthApi<T>,
    pub storage: AuthStorage<S>,
}

impl<T: Transport, S: KeyValueStore> Session<T, S> {
    pub fn new(transport: T, store: S, config: ApiConfig) -> Self {
        Self { api: AuthApi::new(transport, config), storage: AuthStorage::new(store) }
    }
}

/// Session used by the running application.
pub type AppSession = Session<FetchTransport, BrowserStorage>;

impl AppSession {
    /// Browser fetch + `localStorage`, configured from the build environment.
    pub fn browser() -> Self {
        Self::new(FetchTransport, BrowserStorage, ApiConfig::from_env())
    }
}
