//! Handlers for the external links list.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::external_link::{CreateExternalLink, ExternalLink};
use folio_db::repositories::ExternalLinkRepo;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::{require_admin, Credentials};
use crate::error::AppResult;
use crate::extract::{lenient_string, LenientJson};
use crate::response::{ItemsResponse, OkResponse};
use crate::state::AppState;

/// Request body for `POST /external-links`.
///
/// With `action = "delete"` only `id` is read; otherwise the remaining
/// fields describe a new link.
#[derive(Debug, Default, Deserialize)]
pub struct LinkRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default, deserialize_with = "lenient_string")]
    pub action: Option<String>,
    /// Row id as a JSON number or a numeric string.
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
}

/// Acknowledgement of an inserted link.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub ok: bool,
    pub id: DbId,
}

fn parse_id(value: Option<&Value>) -> Option<DbId> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// GET /api/v1/external-links
pub async fn list_links(
    State(state): State<AppState>,
) -> AppResult<Json<ItemsResponse<ExternalLink>>> {
    let pool = state.pool()?;
    let items = ExternalLinkRepo::list(pool).await?;
    Ok(Json(ItemsResponse { items }))
}

/// POST /api/v1/external-links
///
/// Create a link, or delete one when `action` is `"delete"`. Admin only.
pub async fn update_links(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<LinkRequest>,
) -> AppResult<Response> {
    let pool = state.pool()?;
    require_admin(state.config.admin.as_ref(), &input.credentials)?;

    if input.action.as_deref() == Some("delete") {
        let id = parse_id(input.id.as_ref())
            .ok_or_else(|| CoreError::Validation("id is required".into()))?;
        let removed = ExternalLinkRepo::delete(pool, id).await?;
        tracing::info!(id, removed, "Deleted external link");
        return Ok(Json(OkResponse::ok()).into_response());
    }

    let url = input
        .url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| CoreError::Validation("url is required".into()))?;
    let link = CreateExternalLink::normalized(
        url,
        input.title.as_deref(),
        input.category.as_deref(),
        input.kind.as_deref(),
    );
    let created = ExternalLinkRepo::create(pool, &link).await?;
    tracing::info!(id = created.id, url = %created.url, "Created external link");

    Ok(Json(CreatedResponse {
        ok: true,
        id: created.id,
    })
    .into_response())
}
