//! Route definitions for the external links list.

use axum::routing::get;
use axum::Router;

use crate::handlers::{links, method_fallback};
use crate::state::AppState;

/// External link routes mounted at `/external-links`.
///
/// ```text
/// GET    /                  -> list_links
/// POST   /                  -> update_links (admin; create or delete)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(links::list_links)
            .post(links::update_links)
            .fallback(method_fallback),
    )
}
