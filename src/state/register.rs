//! Registration form state, field validation, and submission.
//!
//! Validation is local and field-scoped: every invalid field gets exactly one
//! message and a form with any message never reaches the network.
//! `phone_no` and `bio` are accepted as-is.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::collections::BTreeMap;

use super::form::SubmitPhase;
use super::session::Session;
use crate::net::error::AuthError;
use crate::net::transport::Transport;
use crate::net::types::RegistrationInput;
use crate::routes::Route;
use crate::util::auth_storage::KeyValueStore;
use crate::util::email::is_email_shape;

pub const REGISTER_SUCCESS_TOAST: &str = "Registration successful! Please login.";
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    FullName,
    Email,
    PhoneNo,
    Designation,
    Password,
    Bio,
}

/// One message per invalid field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<RegisterField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: RegisterField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Check the required registration fields.
pub fn validate_registration(input: &RegistrationInput) -> FieldErrors {
    let mut errors = BTreeMap::new();

    if input.full_name.trim().is_empty() {
        errors.insert(RegisterField::FullName, "Full Name is required");
    }

    if input.email.is_empty() {
        errors.insert(RegisterField::Email, "Email is required");
    } else if !is_email_shape(&input.email) {
        errors.insert(RegisterField::Email, "Invalid email format");
    }

    if input.designation.trim().is_empty() {
        errors.insert(RegisterField::Designation, "Designation is required");
    }

    // Length counts UTF-16 code units, like a DOM string length.
    if input.password.is_empty() {
        errors.insert(RegisterField::Password, "Password is required");
    } else if input.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        errors.insert(RegisterField::Password, "Password must be at least 6 characters");
    }

    FieldErrors(errors)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub input: RegistrationInput,
    pub errors: FieldErrors,
    pub api_error: Option<String>,
    pub phase: SubmitPhase,
    pub show_password: bool,
}

impl RegisterForm {
    pub fn field(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::FullName => &self.input.full_name,
            RegisterField::Email => &self.input.email,
            RegisterField::PhoneNo => &self.input.phone_no,
            RegisterField::Designation => &self.input.designation,
            RegisterField::Password => &self.input.password,
            RegisterField::Bio => &self.input.bio,
        }
    }

    pub fn set_field(&mut self, field: RegisterField, value: String) {
        let slot = match field {
            RegisterField::FullName => &mut self.input.full_name,
            RegisterField::Email => &mut self.input.email,
            RegisterField::PhoneNo => &mut self.input.phone_no,
            RegisterField::Designation => &mut self.input.designation,
            RegisterField::Password => &mut self.input.password,
            RegisterField::Bio => &mut self.input.bio,
        };
        *slot = value;
        self.phase.on_edit();
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Validate and, when clean, start a submission with a snapshot of the input.
    ///
    /// Returns `None` when validation fails or a submission is in flight.
    pub fn begin_submit(&mut self) -> Option<RegistrationInput> {
        self.api_error = None;
        if self.phase.is_submitting() {
            return None;
        }
        self.errors = validate_registration(&self.input);
        if !self.errors.is_empty() {
            return None;
        }
        self.phase.begin();
        Some(self.input.clone())
    }

    pub fn finish_submit(&mut self, result: &Result<Route, AuthError>) {
        self.phase.finish(result.is_ok());
        self.api_error = result.as_ref().err().map(ToString::to_string);
    }

    pub fn button_label(&self) -> &'static str {
        if self.phase.is_submitting() { "Creating Account..." } else { "Register" }
    }
}

/// Create the account and route to login. Nothing is persisted.
///
/// # Errors
///
/// Propagates the classified `AuthError` from sign-up.
pub async fn submit_registration<T, S>(session: &Session<T, S>, input: &RegistrationInput) -> Result<Route, AuthError>
where
    T: Transport,
    S: KeyValueStore,
{
    session.api.sign_up(input).await?;
    Ok(Route::Login)
}
