//! Reusable UI components shared across pages.

pub mod backend_status;
pub mod toast;
