//! Route definitions for admin session checks.

use axum::routing::post;
use axum::Router;

use crate::handlers::{admin, method_fallback};
use crate::state::AppState;

/// Admin routes mounted at `/admin`.
///
/// ```text
/// POST   /login            -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(admin::login).fallback(method_fallback))
}
