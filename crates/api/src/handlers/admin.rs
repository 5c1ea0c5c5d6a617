//! Handlers for the `/admin` resource.

use axum::extract::State;
use axum::Json;

use crate::auth::{require_admin, Credentials};
use crate::error::AppResult;
use crate::extract::LenientJson;
use crate::response::OkResponse;
use crate::state::AppState;

/// POST /api/v1/admin/login
///
/// Check the submitted credentials. The frontend keeps them and sends them
/// with every later admin request; no session is created.
pub async fn login(
    State(state): State<AppState>,
    LenientJson(credentials): LenientJson<Credentials>,
) -> AppResult<Json<OkResponse>> {
    require_admin(state.config.admin.as_ref(), &credentials)?;
    tracing::info!("Admin login succeeded");
    Ok(Json(OkResponse::ok()))
}
