//! Route definitions for hosted portfolio assets.
//!
//! All routes are mounted under `/assets`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{assets, method_fallback};
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET    /                  -> list_assets
/// POST   /signature         -> upload_signature (admin)
/// POST   /delete            -> delete_asset (admin)
/// POST   /featured          -> update_featured (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).fallback(method_fallback))
        .route(
            "/signature",
            post(assets::upload_signature).fallback(method_fallback),
        )
        .route(
            "/delete",
            post(assets::delete_asset).fallback(method_fallback),
        )
        .route(
            "/featured",
            post(assets::update_featured).fallback(method_fallback),
        )
}
