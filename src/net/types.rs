//! Wire DTOs for the auth REST service.
//!
//! DESIGN
//! ======
//! Field names mirror the service's camelCase JSON so request bodies and the
//! persisted profile copy stay byte-compatible with what the server issues.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque success payload for sign-up and logout.
pub type ServerResponse = serde_json::Value;

/// Email + password pair submitted by the login form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration form payload, posted as-is to `/userSignUp`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub full_name: String,
    pub email: String,
    pub phone_no: String,
    pub designation: String,
    pub password: String,
    /// Optional; sent as an empty string when left blank.
    pub bio: String,
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone_no", &self.phone_no)
            .field("designation", &self.designation)
            .field("password", &"<redacted>")
            .field("bio", &self.bio)
            .finish()
    }
}

/// Display view of the cached user profile.
///
/// Decoding is lenient: any scalar renders as text and `null` reads as empty,
/// so a server that types `phoneNo` as a number still shows a dashboard. The
/// persisted copy itself is the raw `userData` value, never this struct.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub full_name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub phone_no: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub designation: String,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Bio text when present and non-empty.
    pub fn bio_text(&self) -> Option<&str> {
        self.bio.as_deref().filter(|bio| !bio.is_empty())
    }
}

/// Success body of `POST /userLogin`.
///
/// `user_data` stays an untyped value so it is persisted exactly as issued.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_data: Option<serde_json::Value>,
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_text(deserializer)?.unwrap_or_default())
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}
