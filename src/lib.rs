//! # portal
//!
//! Leptos client-side app for account registration, login and a profile
//! dashboard, backed by a JSON REST auth service.
//!
//! Pages and components are thin; request classification, validation,
//! persisted auth state and the submit lifecycles live in `net`, `util` and
//! `state` and are tested natively against doubles.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
