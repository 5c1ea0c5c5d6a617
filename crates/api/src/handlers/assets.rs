//! Handlers for hosted portfolio assets.
//!
//! Listing is public. Signing uploads, deleting, and moving the featured
//! flag require the admin credentials in the request body. Each handler
//! checks configuration first, then credentials, then its own fields, and
//! only then calls the asset host.

use std::cmp::Reverse;

use axum::extract::State;
use axum::Json;
use folio_cloud::executor::RenameExecutor;
use folio_cloud::lister::{ResourceLister, LIST_PAGE_SIZE};
use folio_cloud::reassign::reassign_featured;
use folio_cloud::signing::sign_upload;
use folio_core::assets::{Asset, Category, ResourceKind};
use folio_core::error::CoreError;
use folio_core::public_id::DEFAULT_FOLDER;
use folio_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::auth::{require_admin, Credentials};
use crate::error::AppResult;
use crate::extract::{lenient_string, LenientJson};
use crate::response::{ItemsResponse, OkResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// One entry of the asset listing.
#[derive(Debug, Serialize)]
pub struct AssetItem {
    pub src: Option<String>,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Base name (public id without folder).
    pub name: String,
    #[serde(rename = "publicId")]
    pub public_id: String,
    pub category: Category,
    pub featured: bool,
    pub created_at: Option<Timestamp>,
}

impl From<Asset> for AssetItem {
    fn from(asset: Asset) -> Self {
        Self {
            src: asset.secure_url,
            kind: asset.kind,
            name: asset.base_name,
            public_id: asset.public_id,
            category: asset.category,
            featured: asset.featured,
            created_at: asset.created_at,
        }
    }
}

/// Request body for `POST /assets/signature`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default, deserialize_with = "lenient_string")]
    pub folder: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub public_id: Option<String>,
}

/// Signed upload parameters for a direct browser upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureResponse {
    pub signature: String,
    pub timestamp: i64,
    pub api_key: String,
    pub cloud_name: String,
}

/// Request body for `POST /assets/delete`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAssetRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default, deserialize_with = "lenient_string")]
    pub public_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub resource_type: Option<String>,
}

/// Request body for `POST /assets/featured`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub public_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub resource_type: Option<String>,
}

/// Successful reassignment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedResponse {
    pub ok: bool,
    /// Final public id of the featured asset.
    pub featured_id: String,
}

/// Treat missing and empty strings alike.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Only `image` and `video` select a kind; any other value is ignored.
fn requested_kind(resource_type: Option<&str>) -> Option<ResourceKind> {
    resource_type.and_then(ResourceKind::from_label)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/assets
///
/// List portfolio assets, newest first. Capped at one page per kind.
pub async fn list_assets(
    State(state): State<AppState>,
) -> AppResult<Json<ItemsResponse<AssetItem>>> {
    let host = state.asset_host()?;
    let prefix = format!("{DEFAULT_FOLDER}/");

    let assets = ResourceLister::new(host)
        .list(&prefix, LIST_PAGE_SIZE)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Asset listing failed");
            CoreError::Remote("Failed to list assets".into())
        })?;

    let mut items: Vec<AssetItem> = assets.into_iter().map(AssetItem::from).collect();
    items.sort_by_key(|item| Reverse(item.created_at));

    Ok(Json(ItemsResponse { items }))
}

/// POST /api/v1/assets/signature
///
/// Sign the parameters of a direct upload into `folder` (default
/// `portfolio`). Admin only.
pub async fn upload_signature(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<SignatureRequest>,
) -> AppResult<Json<SignatureResponse>> {
    let account = state.cloudinary()?;
    require_admin(state.config.admin.as_ref(), &input.credentials)?;

    let folder = non_empty(input.folder.as_deref()).unwrap_or(DEFAULT_FOLDER);
    let public_id = non_empty(input.public_id.as_deref());
    let timestamp = chrono::Utc::now().timestamp();
    let signature = sign_upload(
        folder,
        public_id,
        timestamp,
        &account.api_secret,
        account.signature_algorithm,
    );

    tracing::info!(folder, public_id, "Issued upload signature");

    Ok(Json(SignatureResponse {
        signature,
        timestamp,
        api_key: account.api_key.clone(),
        cloud_name: account.cloud_name.clone(),
    }))
}

/// POST /api/v1/assets/delete
///
/// Delete one asset. Without a `resourceType` the deletion is tried as a
/// video, then as an image. Admin only.
pub async fn delete_asset(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<DeleteAssetRequest>,
) -> AppResult<Json<OkResponse>> {
    let host = state.asset_host()?;
    require_admin(state.config.admin.as_ref(), &input.credentials)?;

    let public_id = non_empty(input.public_id.as_deref())
        .ok_or_else(|| CoreError::Validation("publicId is required".into()))?;
    let kind = requested_kind(input.resource_type.as_deref());

    RenameExecutor::new(host).destroy(public_id, kind).await?;

    Ok(Json(OkResponse::ok()))
}

/// POST /api/v1/assets/featured
///
/// Make `publicId` the only featured asset of `category`. Admin only.
///
/// Renames are issued concurrently; if one fails the request fails and the
/// renames that already went through stay applied. Repeating the request
/// converges.
pub async fn update_featured(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<FeaturedRequest>,
) -> AppResult<Json<FeaturedResponse>> {
    let host = state.asset_host()?;
    require_admin(state.config.admin.as_ref(), &input.credentials)?;

    let (Some(category), Some(public_id)) = (
        non_empty(input.category.as_deref()),
        non_empty(input.public_id.as_deref()),
    ) else {
        return Err(CoreError::Validation("Category and publicId are required".into()).into());
    };
    let category: Category = category.parse()?;
    let kind = requested_kind(input.resource_type.as_deref());

    let plan = reassign_featured(host, category, public_id, kind).await?;

    tracing::info!(
        %category,
        featured_id = %plan.featured_id,
        renames = plan.renames.len(),
        "Featured asset updated"
    );

    Ok(Json(FeaturedResponse {
        ok: true,
        featured_id: plan.featured_id,
    }))
}
