//! Persisted auth token and cached user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages receive an `AuthStorage` through the session instead of touching
//! `localStorage` directly, so tests can swap in a `MemoryStore`.
//!
//! Keys: `authToken` holds the raw token string, `userData` holds the profile
//! as JSON. Both are written by a successful login and cleared together.

#[cfg(test)]
#[path = "auth_storage_test.rs"]
mod auth_storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::LoginResponse;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_DATA_KEY: &str = "userData";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`; inert outside the browser build.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; dropped write to {key}");
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage rejected write to {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Shared in-memory store for tests and native builds.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}

/// Typed accessors for the persisted auth keys.
#[derive(Debug, Clone, Default)]
pub struct AuthStorage<S> {
    store: S,
}

impl<S: KeyValueStore> AuthStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store the token; `None` or an empty token removes the key.
    pub fn set_auth_token(&self, token: Option<&str>) {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => self.store.set(AUTH_TOKEN_KEY, token),
            None => self.store.remove(AUTH_TOKEN_KEY),
        }
    }

    pub fn auth_token(&self) -> Option<String> {
        self.store.get(AUTH_TOKEN_KEY)
    }

    /// Store the profile as JSON; `None` removes the key.
    pub fn set_user_data<T: Serialize>(&self, user_data: Option<&T>) {
        let Some(user_data) = user_data else {
            self.store.remove(USER_DATA_KEY);
            return;
        };
        match serde_json::to_string(user_data) {
            Ok(raw) => self.store.set(USER_DATA_KEY, &raw),
            Err(e) => {
                leptos::logging::warn!("user data not serializable: {e}");
                self.store.remove(USER_DATA_KEY);
            }
        }
    }

    /// Stored profile, or `None` when absent or not decodable as `T`.
    pub fn user_data<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = self.store.get(USER_DATA_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Persist token and profile from a login response as one unit.
    pub fn save_login(&self, response: &LoginResponse) {
        self.set_auth_token(response.token.as_deref());
        self.set_user_data(response.user_data.as_ref());
    }

    pub fn clear_auth_data(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
        self.store.remove(USER_DATA_KEY);
    }
}
