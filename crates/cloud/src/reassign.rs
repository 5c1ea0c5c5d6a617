//! Featured reassignment against the live host.
//!
//! Reads a fresh snapshot, plans the renames with
//! [`folio_core::featured::plan_reassignment`], and dispatches them all at
//! once. The first failing rename fails the batch; renames that already
//! completed stay applied, and the next reassignment recomputes from
//! whatever state the host is left in.

use folio_core::assets::{Category, ResourceKind};
use folio_core::featured::{plan_reassignment, ReassignmentPlan};
use folio_core::public_id::DEFAULT_FOLDER;
use futures::future::try_join_all;

use crate::error::HostError;
use crate::executor::RenameExecutor;
use crate::host::AssetHost;
use crate::lister::{ResourceLister, REASSIGN_PAGE_SIZE};

/// Make `public_id` the only featured asset of `category`.
///
/// `kind` is the caller's knowledge of the target's resource kind. Returns
/// the executed plan; `plan.featured_id` is the target's final public id.
pub async fn reassign_featured(
    host: &dyn AssetHost,
    category: Category,
    public_id: &str,
    kind: Option<ResourceKind>,
) -> Result<ReassignmentPlan, HostError> {
    let prefix = format!("{DEFAULT_FOLDER}/");
    let snapshot = ResourceLister::new(host)
        .list(&prefix, REASSIGN_PAGE_SIZE)
        .await?;

    let plan = plan_reassignment(&snapshot, category, public_id, kind);
    tracing::info!(
        %category,
        target = public_id,
        featured_id = %plan.featured_id,
        snapshot_size = snapshot.len(),
        demotions = plan.demotions().count(),
        promote = plan.promotion().is_some(),
        "Planned featured reassignment"
    );

    let executor = RenameExecutor::new(host);
    try_join_all(plan.renames.iter().map(|op| executor.apply(op))).await?;

    Ok(plan)
}
