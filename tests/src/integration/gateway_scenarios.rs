//! # Gateway Scenarios
//!
//! HTTP-surface behavior: credential enforcement before store access, error
//! classification on the wire, and the trust boundary on request payloads.

use super::wired_core;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use fb_api_gateway::{build_router, AppState, GatewayConfig};
use fb_identity::HmacTokenGate;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const SECRET: &[u8] = b"integration-test-secret";

fn gateway() -> (Router, HmacTokenGate) {
    let (foods, _, workflow) = wired_core();
    let state = AppState {
        foods,
        workflow,
        identity: Arc::new(HmacTokenGate::new(SECRET)),
    };
    (
        build_router(state, &GatewayConfig::default()),
        HmacTokenGate::new(SECRET),
    )
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn every_protected_route_rejects_anonymous_callers() {
    let (router, _) = gateway();
    let probes = [
        (Method::POST, "/add-food", Some(json!({}))),
        (Method::POST, "/food-request", Some(json!({}))),
        (Method::GET, "/my-foods", None),
        (Method::GET, "/my-requests", None),
    ];

    for (method, uri, body) in probes {
        let response = router
            .clone()
            .oneshot(request(method.clone(), uri, None, body))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} must demand a credential"
        );
        assert_eq!(json_body(response).await["error"], json!("unauthorized"));
    }
}

#[tokio::test]
async fn a_non_bearer_authorization_header_is_rejected() {
    let (router, _) = gateway();
    let probe = Request::builder()
        .method(Method::GET)
        .uri("/my-foods")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(probe).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn conflict_surfaces_as_409_with_classification() {
    let (router, gate) = gateway();
    let donor_token = gate.mint("donor-1", "a@x.com");

    let response = router
        .clone()
        .oneshot(request(
            Method::POST,
            "/add-food",
            Some(&donor_token),
            Some(json!({ "name": "Soup" })),
        ))
        .await
        .unwrap();
    let food_id = json_body(response).await["id"].as_str().unwrap().to_owned();

    let first = router
        .clone()
        .oneshot(request(
            Method::POST,
            "/food-request",
            Some(&gate.mint("user-2", "b@x.com")),
            Some(json!({ "foodId": food_id })),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = router
        .oneshot(request(
            Method::POST,
            "/food-request",
            Some(&gate.mint("user-3", "c@x.com")),
            Some(json!({ "foodId": food_id })),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(json_body(second).await["error"], json!("conflict"));
}

#[tokio::test]
async fn spoofed_identity_fields_in_payloads_never_stick() {
    let (router, gate) = gateway();
    let donor_token = gate.mint("donor-1", "a@x.com");

    // Donor tries to pre-set status and ownership through the body.
    let response = router
        .clone()
        .oneshot(request(
            Method::POST,
            "/add-food",
            Some(&donor_token),
            Some(json!({
                "name": "Stew",
                "status": "requested",
                "donorEmail": "someone-else@x.com",
            })),
        ))
        .await
        .unwrap();
    let created = json_body(response).await;
    assert_eq!(created["status"], json!("available"));
    assert_eq!(created["donorEmail"], json!("a@x.com"));
    let food_id = created["id"].as_str().unwrap().to_owned();

    // Requester tries to forge the record's identity and date.
    let response = router
        .oneshot(request(
            Method::POST,
            "/food-request",
            Some(&gate.mint("user-2", "b@x.com")),
            Some(json!({
                "foodId": food_id,
                "requesterEmail": "attacker@x.com",
                "requestDate": "1970-01-01T00:00:00Z",
            })),
        ))
        .await
        .unwrap();
    let recorded = json_body(response).await;
    assert_eq!(recorded["requesterEmail"], json!("b@x.com"));
    assert_ne!(recorded["requestDate"], json!("1970-01-01T00:00:00Z"));
}
