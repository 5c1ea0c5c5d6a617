//! Integration tests for asset listing, upload signatures, and deletion.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::DateTime;
use common::{admin_body, body_json, build_app, build_test_app, get, post_json, test_config};
use folio_cloud::memory::{HostCall, MemoryAssetHost};
use folio_cloud::signing::{sign_upload, SignatureAlgorithm};
use folio_cloud::AssetHost;
use folio_core::assets::ResourceKind::{Image, Video};
use serde_json::json;

fn at(secs: i64) -> chrono::DateTime<chrono::Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

// ---------------------------------------------------------------------------
// GET /api/v1/assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_is_sorted_newest_first() {
    let host = Arc::new(
        MemoryAssetHost::new()
            .with_resource_at("portfolio/shorts__standard__old", Image, at(1_000))
            .with_resource_at("portfolio/static-visuals__featured__new", Video, at(3_000))
            .with_resource_at("portfolio/mid", Image, at(2_000))
            .with_resource_at("elsewhere/ignored", Image, at(4_000)),
    );
    let app = build_test_app(host);

    let response = get(app, "/api/v1/assets").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["items"].as_array().unwrap();
    let ids: Vec<_> = items.iter().map(|i| i["publicId"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec![
            "portfolio/static-visuals__featured__new",
            "portfolio/mid",
            "portfolio/shorts__standard__old",
        ]
    );

    let newest = &items[0];
    assert_eq!(newest["type"], "video");
    assert_eq!(newest["name"], "static-visuals__featured__new");
    assert_eq!(newest["category"], "static-visuals");
    assert_eq!(newest["featured"], true);
    assert!(newest["src"].as_str().unwrap().ends_with("static-visuals__featured__new"));
    assert!(newest["created_at"].is_string());

    // Malformed names fall back to defaults.
    assert_eq!(items[1]["category"], "motion-saas");
    assert_eq!(items[1]["featured"], false);
}

#[tokio::test]
async fn listing_uses_page_size_100() {
    let host = Arc::new(MemoryAssetHost::new());
    let app = build_test_app(Arc::clone(&host));

    get(app, "/api/v1/assets").await;

    for call in host.calls().await {
        assert!(matches!(call, HostCall::List { max_results: 100, .. }));
    }
}

#[tokio::test]
async fn listing_failure_returns_generic_500() {
    let host = Arc::new(MemoryAssetHost::new().with_list_failure(
        Video,
        "portfolio/",
        "upstream exploded",
    ));
    let app = build_test_app(host);

    let response = get(app, "/api/v1/assets").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to list assets");
}

#[tokio::test]
async fn listing_without_asset_host_returns_config_error() {
    let app = build_app(test_config(), None, None);

    let response = get(app, "/api/v1/assets").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Cloudinary config missing");
}

// ---------------------------------------------------------------------------
// POST /api/v1/assets/signature
// ---------------------------------------------------------------------------

#[tokio::test]
async fn signature_defaults_to_portfolio_folder() {
    let app = build_test_app(Arc::new(MemoryAssetHost::new()));

    let response = post_json(app, "/api/v1/assets/signature", admin_body(json!({}))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let timestamp = json["timestamp"].as_i64().unwrap();
    assert_eq!(
        json["signature"],
        sign_upload(
            "portfolio",
            None,
            timestamp,
            common::API_SECRET,
            SignatureAlgorithm::Sha1
        )
    );
    assert_eq!(json["signature"].as_str().unwrap().len(), 40);
    assert_eq!(json["apiKey"], "test-key");
    assert_eq!(json["cloudName"], "demo");
}

#[tokio::test]
async fn signature_covers_folder_and_public_id() {
    let app = build_test_app(Arc::new(MemoryAssetHost::new()));

    let response = post_json(
        app,
        "/api/v1/assets/signature",
        admin_body(json!({ "folder": "drafts", "publicId": "shorts__standard__clip" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let timestamp = json["timestamp"].as_i64().unwrap();
    assert_eq!(
        json["signature"],
        sign_upload(
            "drafts",
            Some("shorts__standard__clip"),
            timestamp,
            common::API_SECRET,
            SignatureAlgorithm::Sha1
        )
    );
}

#[tokio::test]
async fn signature_follows_configured_algorithm() {
    let mut config = test_config();
    if let Some(cloudinary) = config.cloudinary.as_mut() {
        cloudinary.signature_algorithm = SignatureAlgorithm::Sha256;
    }
    let host: Arc<dyn AssetHost> = Arc::new(MemoryAssetHost::new());
    let app = build_app(config, Some(host), None);

    let response = post_json(app, "/api/v1/assets/signature", admin_body(json!({}))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let timestamp = json["timestamp"].as_i64().unwrap();
    assert_eq!(
        json["signature"],
        sign_upload(
            "portfolio",
            None,
            timestamp,
            common::API_SECRET,
            SignatureAlgorithm::Sha256
        )
    );
    assert_eq!(json["signature"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn signature_requires_admin() {
    let app = build_test_app(Arc::new(MemoryAssetHost::new()));

    let response = post_json(app, "/api/v1/assets/signature", json!({})).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signature_without_cloudinary_config_returns_500() {
    let config = folio_api::config::ServerConfig {
        cloudinary: None,
        ..test_config()
    };
    let host: Arc<dyn AssetHost> = Arc::new(MemoryAssetHost::new());
    let app = build_app(config, Some(host), None);

    let response = post_json(app, "/api/v1/assets/signature", admin_body(json!({}))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFIG_ERROR");
}

// ---------------------------------------------------------------------------
// POST /api/v1/assets/delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_without_kind_falls_back_to_image() {
    let host = Arc::new(MemoryAssetHost::new().with_resource("portfolio/still", Image));
    let app = build_test_app(Arc::clone(&host));

    let response = post_json(
        app,
        "/api/v1/assets/delete",
        admin_body(json!({ "publicId": "portfolio/still" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "ok": true }));
    assert!(host.public_ids().await.is_empty());
    assert_eq!(host.calls().await.len(), 2);
}

#[tokio::test]
async fn delete_with_kind_issues_one_call() {
    let host = Arc::new(MemoryAssetHost::new().with_resource("portfolio/clip", Video));
    let app = build_test_app(Arc::clone(&host));

    let response = post_json(
        app,
        "/api/v1/assets/delete",
        admin_body(json!({ "publicId": "portfolio/clip", "resourceType": "video" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        host.calls().await,
        vec![HostCall::Destroy {
            public_id: "portfolio/clip".into(),
            kind: Video,
        }]
    );
}

#[tokio::test]
async fn delete_requires_public_id() {
    let app = build_test_app(Arc::new(MemoryAssetHost::new()));

    let response = post_json(app, "/api/v1/assets/delete", admin_body(json!({}))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "publicId is required");
}

#[tokio::test]
async fn delete_of_missing_asset_returns_host_message() {
    let app = build_test_app(Arc::new(MemoryAssetHost::new()));

    let response = post_json(
        app,
        "/api/v1/assets/delete",
        admin_body(json!({ "publicId": "portfolio/ghost", "resourceType": "image" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Resource not found - portfolio/ghost");
    assert_eq!(json["code"], "REMOTE_ERROR");
}

#[tokio::test]
async fn delete_failure_surfaces_host_message() {
    let host = Arc::new(
        MemoryAssetHost::new()
            .with_resource("portfolio/clip", Video)
            .with_destroy_failure("portfolio/clip", Video, "Resource is locked"),
    );
    let app = build_test_app(Arc::clone(&host));

    let response = post_json(
        app,
        "/api/v1/assets/delete",
        admin_body(json!({ "publicId": "portfolio/clip", "resourceType": "video" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Resource is locked");
    assert_eq!(host.public_ids().await, vec!["portfolio/clip"]);
}
