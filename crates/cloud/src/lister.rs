//! Snapshot of the portfolio as stored on the asset host.

use folio_core::assets::{Asset, ResourceKind};

use crate::error::HostError;
use crate::host::{AssetHost, RemoteResource};

/// Page size used by the read-only listing endpoint.
pub const LIST_PAGE_SIZE: u32 = 100;

/// Page size used when taking a snapshot for featured reassignment.
pub const REASSIGN_PAGE_SIZE: u32 = 500;

/// Lists every asset under a prefix, across both resource kinds.
pub struct ResourceLister<'a> {
    host: &'a dyn AssetHost,
}

impl<'a> ResourceLister<'a> {
    pub fn new(host: &'a dyn AssetHost) -> Self {
        Self { host }
    }

    /// Query images and videos concurrently and merge them, images first.
    ///
    /// Each kind is capped at `page_size` results; catalogs larger than that
    /// are truncated. Either query failing fails the whole listing.
    pub async fn list(&self, prefix: &str, page_size: u32) -> Result<Vec<Asset>, HostError> {
        let (images, videos) = futures::try_join!(
            self.host
                .list_resources(ResourceKind::Image, prefix, page_size),
            self.host
                .list_resources(ResourceKind::Video, prefix, page_size),
        )?;

        Ok(images
            .into_iter()
            .chain(videos)
            .map(RemoteResource::into_asset)
            .collect())
    }
}
