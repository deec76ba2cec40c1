use super::*;
use serde_json::json;

#[test]
fn registration_input_serializes_camel_case() {
    let input = RegistrationInput {
        full_name: "Jane Doe".to_owned(),
        email: "jane@x.com".to_owned(),
        phone_no: "555-0100".to_owned(),
        designation: "Engineer".to_owned(),
        password: "secret1".to_owned(),
        bio: String::new(),
    };
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(
        value,
        json!({
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "phoneNo": "555-0100",
            "designation": "Engineer",
            "password": "secret1",
            "bio": ""
        })
    );
}

#[test]
fn debug_output_redacts_passwords() {
    let creds = Credentials { email: "a@b.co".to_owned(), password: "hunter22".to_owned() };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.co"));
    assert!(!rendered.contains("hunter22"));

    let input = RegistrationInput { password: "hunter22".to_owned(), ..RegistrationInput::default() };
    assert!(!format!("{input:?}").contains("hunter22"));
}

#[test]
fn login_response_parses_token_and_user_data() {
    let body = json!({
        "token": "tok-1",
        "userData": {
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "phoneNo": "555-0100",
            "designation": "Engineer"
        }
    });
    let parsed: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.token.as_deref(), Some("tok-1"));
    assert_eq!(parsed.user_data.unwrap()["designation"], json!("Engineer"));
}

#[test]
fn login_response_keeps_user_data_untouched() {
    let user_data = json!({ "fullName": "Jane Doe", "phoneNo": 5550100, "bio": null, "roles": ["admin"] });
    let parsed: LoginResponse = serde_json::from_value(json!({ "token": "tok-1", "userData": user_data.clone() })).unwrap();
    assert_eq!(parsed.user_data, Some(user_data));
}

#[test]
fn user_profile_renders_scalars_as_text() {
    let profile: UserProfile = serde_json::from_value(json!({
        "fullName": "Jane Doe",
        "phoneNo": 5550100,
        "designation": true,
        "bio": null
    }))
    .unwrap();
    assert_eq!(profile.phone_no, "5550100");
    assert_eq!(profile.designation, "true");
    assert_eq!(profile.email, "");
    assert_eq!(profile.bio, None);
}

#[test]
fn login_response_tolerates_missing_fields() {
    let parsed: LoginResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, LoginResponse::default());
}

#[test]
fn user_profile_keeps_unknown_fields() {
    let body = json!({
        "_id": "64f0",
        "fullName": "Jane Doe",
        "email": "jane@x.com",
        "phoneNo": null,
        "designation": "Engineer",
        "bio": "Builds things",
        "createdAt": "2024-01-01T00:00:00Z"
    });
    let profile: UserProfile = serde_json::from_value(body).unwrap();
    assert_eq!(profile.phone_no, "");
    assert_eq!(profile.extra.get("_id"), Some(&json!("64f0")));
    assert_eq!(profile.extra.get("createdAt"), Some(&json!("2024-01-01T00:00:00Z")));

    let again: UserProfile = serde_json::from_value(serde_json::to_value(&profile).unwrap()).unwrap();
    assert_eq!(again, profile);
}

#[test]
fn bio_text_hides_empty_bio() {
    let mut profile = UserProfile { bio: Some(String::new()), ..UserProfile::default() };
    assert_eq!(profile.bio_text(), None);
    profile.bio = Some("Hello".to_owned());
    assert_eq!(profile.bio_text(), Some("Hello"));
}
