//! Page state and the operations behind each screen.
//!
//! DESIGN
//! ======
//! Each page keeps a plain struct (`LoginForm`, `RegisterForm`, ...) inside an
//! `RwSignal`, and the async submit functions take a `Session` so they run
//! against any `Transport` and `KeyValueStore`. Pages only wire DOM events to
//! these functions.

pub mod dashboard;
pub mod form;
pub mod login;
pub mod register;
pub mod session;
pub mod toast;
