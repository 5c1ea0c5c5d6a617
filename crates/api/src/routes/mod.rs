pub mod admin;
pub mod assets;
pub mod health;
pub mod links;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/login                 credential check (POST)
///
/// /assets                      list portfolio assets (GET)
/// /assets/signature            signed upload parameters (POST)
/// /assets/delete               delete one asset (POST)
/// /assets/featured             featured reassignment (POST)
///
/// /external-links              list (GET), create or delete (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", admin::router())
        .nest("/assets", assets::router())
        .nest("/external-links", links::router())
}
