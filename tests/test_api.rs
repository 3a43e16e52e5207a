//! HTTP contract tests through the full router

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use axess::application::AdviceService;
use axess::config::{AdviceRateLimitConfig, LlmConfig, ServerConfig};
use axess::infrastructure::rate_limiter::FixedWindowLimiter;
use axess::presentation::{create_router, AppState};

use common::{MockAdviceProvider, COMPLETE_ADVICE_JSON};

fn router_with(provider: Arc<MockAdviceProvider>, max_requests: u32) -> Router {
    let advice_limit = AdviceRateLimitConfig {
        max_requests,
        window_seconds: 60,
        ..AdviceRateLimitConfig::default()
    };
    let limiter = Arc::new(FixedWindowLimiter::from_config(&advice_limit));
    let advice_service = Arc::new(AdviceService::new(provider, limiter, LlmConfig::default()));
    let server = ServerConfig {
        enable_docs: false,
        ..ServerConfig::default()
    };
    create_router(
        AppState {
            advice_service,
            advice_limit,
        },
        &server,
    )
}

fn advice_payload() -> Value {
    json!({
        "url": "https://example.com",
        "totalViolations": 1,
        "violations": [{
            "id": "image-alt",
            "impact": "critical",
            "description": "Images must have alternate text",
            "help": "Images must have an alt attribute",
            "tags": ["wcag2a"],
            "nodeCount": 1,
            "nodes": []
        }]
    })
}

fn post_advice(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/advice")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", "203.0.113.9")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = router_with(Arc::new(MockAdviceProvider::returning(COMPLETE_ADVICE_JSON)), 10);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_advice_success_reports_remaining_quota() {
    let app = router_with(Arc::new(MockAdviceProvider::returning(COMPLETE_ADVICE_JSON)), 10);

    let response = app.oneshot(post_advice(&advice_payload())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-ratelimit-remaining").unwrap(),
        "9"
    );
    let body = body_json(response).await;
    assert_eq!(body["remainingRequests"], 9);
    assert_eq!(body["response"]["estimatedEffort"], "Medium");
    assert_eq!(body["response"]["topFixes"][0]["rank"], 1);
}

#[tokio::test]
async fn test_empty_violations_is_bad_request() {
    let app = router_with(Arc::new(MockAdviceProvider::returning(COMPLETE_ADVICE_JSON)), 10);

    let payload = json!({
        "url": "https://example.com",
        "totalViolations": 0,
        "violations": []
    });
    let response = app.oneshot(post_advice(&payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "empty_input");
    assert_eq!(body["error"], "No violations to analyze");
}

#[tokio::test]
async fn test_quota_exhaustion_returns_429() {
    let app = router_with(Arc::new(MockAdviceProvider::returning(COMPLETE_ADVICE_JSON)), 1);

    let first = app
        .clone()
        .oneshot(post_advice(&advice_payload()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await["remainingRequests"], 0);

    let second = app.oneshot(post_advice(&advice_payload())).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(second.headers().contains_key(header::RETRY_AFTER));
    let body = body_json(second).await;
    assert_eq!(body["code"], "rate_limited");
}

#[tokio::test]
async fn test_clients_get_separate_quotas() {
    let app = router_with(Arc::new(MockAdviceProvider::returning(COMPLETE_ADVICE_JSON)), 1);

    let first = app
        .clone()
        .oneshot(post_advice(&advice_payload()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let other_client = Request::builder()
        .method("POST")
        .uri("/api/v1/advice")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", "198.51.100.7")
        .body(Body::from(advice_payload().to_string()))
        .unwrap();
    let response = app.oneshot(other_client).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unconfigured_service_is_server_error() {
    let app = router_with(Arc::new(MockAdviceProvider::unconfigured()), 10);

    let response = app.oneshot(post_advice(&advice_payload())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["code"], "config_error");
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let app = router_with(Arc::new(MockAdviceProvider::returning(COMPLETE_ADVICE_JSON)), 10);

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/advice")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}
