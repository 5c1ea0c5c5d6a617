//! Kind-resolving execution of renames and deletions.
//!
//! Every host call must name a resource kind. When the caller knows it, one
//! call is made. When it does not, the call is tried as a video first and,
//! if that fails, once more as an image; the second failure is the one
//! reported.

use std::future::Future;

use folio_core::assets::ResourceKind;
use folio_core::featured::RenameOp;

use crate::error::HostError;
use crate::host::{AssetHost, RenameOptions};

/// Issues renames and deletions against the host.
pub struct RenameExecutor<'a> {
    host: &'a dyn AssetHost,
}

impl<'a> RenameExecutor<'a> {
    pub fn new(host: &'a dyn AssetHost) -> Self {
        Self { host }
    }

    /// Rename `from_id` to `to_id`, overwriting and invalidating.
    ///
    /// Returns the kind the rename succeeded with.
    pub async fn rename(
        &self,
        from_id: &str,
        to_id: &str,
        kind: Option<ResourceKind>,
    ) -> Result<ResourceKind, HostError> {
        let resolved = with_kind_fallback(kind, |kind| {
            self.host
                .rename(from_id, to_id, kind, RenameOptions::default())
        })
        .await?;

        tracing::info!(from_id, to_id, kind = %resolved, "Renamed asset");
        Ok(resolved)
    }

    /// Apply one planned rename.
    pub async fn apply(&self, op: &RenameOp) -> Result<ResourceKind, HostError> {
        self.rename(&op.from_id, &op.to_id, op.kind).await
    }

    /// Delete `public_id`, purging cached copies.
    pub async fn destroy(
        &self,
        public_id: &str,
        kind: Option<ResourceKind>,
    ) -> Result<ResourceKind, HostError> {
        let resolved =
            with_kind_fallback(kind, |kind| self.host.destroy(public_id, kind)).await?;

        tracing::info!(public_id, kind = %resolved, "Deleted asset");
        Ok(resolved)
    }
}

/// Run `attempt` with the given kind, or with each kind of
/// [`ResourceKind::FALLBACK_ORDER`] until one succeeds.
async fn with_kind_fallback<F, Fut>(
    kind: Option<ResourceKind>,
    mut attempt: F,
) -> Result<ResourceKind, HostError>
where
    F: FnMut(ResourceKind) -> Fut,
    Fut: Future<Output = Result<(), HostError>>,
{
    if let Some(kind) = kind {
        attempt(kind).await?;
        return Ok(kind);
    }

    let [first, second] = ResourceKind::FALLBACK_ORDER;
    match attempt(first).await {
        Ok(()) => Ok(first),
        Err(err) => {
            tracing::debug!(
                tried = %first,
                retry = %second,
                error = %err,
                "Kind unknown and first attempt failed, retrying"
            );
            attempt(second).await?;
            Ok(second)
        }
    }
}
