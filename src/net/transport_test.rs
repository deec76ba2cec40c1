use super::*;
use serde_json::json;

#[test]
fn success_range_is_2xx() {
    let at = |status| RawResponse { status, body: String::new() };
    assert!(at(200).is_success());
    assert!(at(204).is_success());
    assert!(at(299).is_success());
    assert!(!at(199).is_success());
    assert!(!at(304).is_success());
    assert!(!at(401).is_success());
}

#[tokio::test]
async fn response_head_reads_body_later() {
    let head = ResponseHead::new(503, async { Ok("down".to_owned()) });
    assert!(!head.is_success());
    assert_eq!(head.read().await, Ok(RawResponse { status: 503, body: "down".to_owned() }));
}

#[test]
fn post_builder_sets_body_without_credentials() {
    let req = ApiRequest::post("http://x/userLogin", Some(json!({ "email": "a@b.co" })));
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, Some(json!({ "email": "a@b.co" })));
    assert!(!req.include_credentials);
    assert!(req.with_credentials().include_credentials);
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_fetch_transport_reports_unreachable() {
    let outcome = FetchTransport.send(ApiRequest::get("http://localhost:5000/api/auth/")).await;
    assert!(matches!(outcome, Err(TransportFailure::Unreachable(_))));
}
