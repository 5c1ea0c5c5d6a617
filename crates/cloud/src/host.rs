//! The asset host seam.

use async_trait::async_trait;
use folio_core::assets::{Asset, ResourceKind};
use folio_core::types::Timestamp;
use serde::Deserialize;

use crate::error::HostError;

/// One resource as reported by the host's listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteResource {
    pub public_id: String,
    /// Host-side type label (`image`, `video`, `raw`, ...).
    pub resource_type: String,
    #[serde(default)]
    pub secure_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl RemoteResource {
    /// Convert into the domain read model, decoding the naming convention.
    pub fn into_asset(self) -> Asset {
        let mut asset = Asset::new(self.public_id, ResourceKind::from_remote(&self.resource_type));
        asset.secure_url = self.secure_url;
        asset.created_at = self.created_at;
        asset
    }
}

/// Flags sent with every rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameOptions {
    /// Replace an existing resource at the destination id.
    pub overwrite: bool,
    /// Purge CDN-cached copies of the resource.
    pub invalidate: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            overwrite: true,
            invalidate: true,
        }
    }
}

/// Operations the admin backend needs from the remote asset host.
///
/// The host offers no atomicity across calls; each method is one remote
/// request.
#[async_trait]
pub trait AssetHost: Send + Sync {
    /// List up to `max_results` resources of `kind` whose public id starts
    /// with `prefix`. No further pages are fetched.
    async fn list_resources(
        &self,
        kind: ResourceKind,
        prefix: &str,
        max_results: u32,
    ) -> Result<Vec<RemoteResource>, HostError>;

    /// Change the public id of a resource of `kind`.
    async fn rename(
        &self,
        from_id: &str,
        to_id: &str,
        kind: ResourceKind,
        options: RenameOptions,
    ) -> Result<(), HostError>;

    /// Delete a resource of `kind`, purging cached copies.
    async fn destroy(&self, public_id: &str, kind: ResourceKind) -> Result<(), HostError>;
}
