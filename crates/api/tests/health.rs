//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_app, build_test_app, get, test_config};
use folio_cloud::memory::MemoryAssetHost;
use tower::ServiceExt;

fn app() -> axum::Router {
    build_test_app(Arc::new(MemoryAssetHost::new()))
}

// ---------------------------------------------------------------------------
// Test: GET /health reports which collaborators are configured
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let response = get(app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["admin_configured"], true);
    assert_eq!(json["asset_host_configured"], true);
    assert!(json["db_healthy"].is_null());
}

#[tokio::test]
async fn health_check_reports_missing_collaborators() {
    let config = folio_api::config::ServerConfig {
        admin: None,
        ..test_config()
    };
    let response = get(build_app(config, None, None), "/health").await;

    let json = body_json(response).await;
    assert_eq!(json["admin_configured"], false);
    assert_eq!(json["asset_host_configured"], false);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(app(), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/assets/featured")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}

#[tokio::test]
async fn wildcard_origin_allows_any_caller() {
    let config = folio_api::config::ServerConfig {
        cors_origins: vec!["*".to_string()],
        ..test_config()
    };
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header("Origin", "https://anywhere.test")
        .body(Body::empty())
        .unwrap();

    let response = build_app(config, None, None).oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
