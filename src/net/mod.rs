//! Networking modules for the auth REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes the auth operations, `transport` is the fetch seam they run
//! over, `error` classifies failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
