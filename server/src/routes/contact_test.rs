use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::rate_limit::RateLimitError;
use crate::routes::api_routes;
use crate::state::test_helpers::{MockRelay, relay_config, test_app_state};

fn contact_request(json: &str) -> Request<Body> {
    Request::post("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(json.to_owned()))
        .expect("request")
}

async fn response_json(response: Response) -> serde_json::Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

const ADA: &str = r#"{"name":"Ada","email":"ada@x.com","message":"Hello"}"#;

// =============================================================================
// status mapping
// =============================================================================

#[test]
fn contact_error_to_status_maps_every_kind() {
    assert_eq!(contact_error_to_status(&ContactError::Configuration), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(contact_error_to_status(&ContactError::InvalidInput("x")), StatusCode::BAD_REQUEST);
    assert_eq!(
        contact_error_to_status(&ContactError::RateLimited(RateLimitError::GlobalExceeded {
            limit: 1,
            window_secs: 60
        })),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(
        contact_error_to_status(&ContactError::Relay(RelayError::Request("timeout".into()))),
        StatusCode::BAD_GATEWAY
    );
}

#[test]
fn retry_after_only_for_retryable_errors() {
    let limited = ContactError::RateLimited(RateLimitError::PerSenderExceeded { limit: 3, window_secs: 600 });
    assert_eq!(retry_after_secs(&limited), Some(600));

    let outage = ContactError::Relay(RelayError::Response { status: 503, body: String::new() });
    assert_eq!(retry_after_secs(&outage), Some(RELAY_RETRY_AFTER_SECS));

    let rejected = ContactError::Relay(RelayError::Response { status: 400, body: String::new() });
    assert_eq!(retry_after_secs(&rejected), None);
    assert_eq!(retry_after_secs(&ContactError::Configuration), None);
    assert_eq!(retry_after_secs(&ContactError::InvalidInput("x")), None);
}

// =============================================================================
// router
// =============================================================================

#[tokio::test]
async fn delivered_submission_returns_ok() {
    let relay = Arc::new(MockRelay::succeeding());
    let app = api_routes(test_app_state(Some(relay_config()), relay.clone()));

    let response = app.oneshot(contact_request(ADA)).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, serde_json::json!({ "ok": true }));
    assert_eq!(relay.call_count(), 1);
}

#[tokio::test]
async fn unconfigured_relay_returns_503_without_calling_relay() {
    let relay = Arc::new(MockRelay::succeeding());
    let app = api_routes(test_app_state(None, relay.clone()));

    let response = app.oneshot(contact_request(ADA)).await.expect("response");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response_json(response).await,
        serde_json::json!({ "ok": false, "error": "E_NOT_CONFIGURED" })
    );
    assert_eq!(relay.call_count(), 0);
}

#[tokio::test]
async fn relay_failure_returns_502() {
    let relay = Arc::new(MockRelay::failing(500));
    let app = api_routes(test_app_state(Some(relay_config()), relay));

    let response = app.oneshot(contact_request(ADA)).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.headers()[header::RETRY_AFTER], "30");
    assert_eq!(response_json(response).await["error"], "E_RELAY");
}

#[tokio::test]
async fn blank_field_returns_400() {
    let relay = Arc::new(MockRelay::succeeding());
    let app = api_routes(test_app_state(Some(relay_config()), relay.clone()));

    let body = r#"{"name":"Ada","email":"ada@x.com","message":""}"#;
    let response = app.oneshot(contact_request(body)).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await["error"], "E_INVALID_INPUT");
    assert_eq!(relay.call_count(), 0);
}

#[tokio::test]
async fn malformed_bodies_return_invalid_input_json() {
    let relay = Arc::new(MockRelay::succeeding());
    let app = api_routes(test_app_state(Some(relay_config()), relay.clone()));

    let wrong_type = contact_request(r#"{"name":1,"email":"ada@x.com","message":"Hello"}"#);
    let not_json = contact_request("name=Ada");
    let no_content_type = Request::post("/api/contact").body(Body::from(ADA)).expect("request");

    for request in [wrong_type, not_json, no_content_type] {
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::RETRY_AFTER).is_none());
        assert_eq!(
            response_json(response).await,
            serde_json::json!({ "ok": false, "error": "E_INVALID_INPUT" })
        );
    }
    assert_eq!(relay.call_count(), 0);
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(test_app_state(None, Arc::new(MockRelay::succeeding())));
    let request = Request::get("/healthz").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn repeated_sender_is_rate_limited() {
    let relay = Arc::new(MockRelay::succeeding());
    let app = api_routes(test_app_state(Some(relay_config()), relay.clone()));

    for _ in 0..3 {
        let response = app.clone().oneshot(contact_request(ADA)).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(contact_request(ADA)).await.expect("response");
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()[header::RETRY_AFTER], "600");
    assert_eq!(response_json(response).await["error"], "E_RATE_LIMITED");
    assert_eq!(relay.call_count(), 3);
}
