use super::*;
use serde_json::json;

fn response(status: u16, body: &str) -> RawResponse {
    RawResponse { status, body: body.to_owned() }
}

#[test]
fn aborted_maps_to_timeout() {
    let err = classify_failure(TransportFailure::Aborted);
    assert_eq!(err, AuthError::Timeout);
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert_eq!(err.to_string(), "Request timeout. Please try again.");
}

#[test]
fn unreachable_maps_to_network_error() {
    let err = classify_failure(TransportFailure::Unreachable("Failed to fetch".to_owned()));
    assert_eq!(err.kind(), ErrorKind::NetworkUnreachable);
    assert_eq!(err.to_string(), "Network error. Please check if the backend server is running.");
}

#[test]
fn success_status_returns_body() {
    let body = classify_response(AuthOperation::SignUp, &response(201, r#"{"ok":true}"#)).unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[test]
fn success_with_empty_body_is_null() {
    let body = classify_response(AuthOperation::Logout, &response(204, "")).unwrap();
    assert_eq!(body, serde_json::Value::Null);
}

#[test]
fn rejection_uses_server_message() {
    let err = classify_response(AuthOperation::Login, &response(401, r#"{"message":"Invalid credentials"}"#)).unwrap_err();
    assert_eq!(err, AuthError::ServerRejected { status: 401, message: "Invalid credentials".to_owned() });
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn rejection_falls_back_per_operation() {
    let cases = [
        (AuthOperation::SignUp, "Registration failed"),
        (AuthOperation::Login, "Login failed"),
        (AuthOperation::Logout, "Logout failed"),
    ];
    for (op, expected) in cases {
        let err = classify_response(op, &response(500, "<html>oops</html>")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServerRejected);
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn rejection_ignores_empty_or_non_string_message() {
    let err = classify_response(AuthOperation::Login, &response(400, r#"{"message":""}"#)).unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
    let err = classify_response(AuthOperation::Login, &response(400, r#"{"message":42}"#)).unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
}

#[test]
fn operation_paths_match_service_routes() {
    assert_eq!(AuthOperation::Health.path(), "/");
    assert_eq!(AuthOperation::SignUp.path(), "/userSignUp");
    assert_eq!(AuthOperation::Login.path(), "/userLogin");
    assert_eq!(AuthOperation::Logout.path(), "/logout");
}
