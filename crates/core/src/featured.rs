//! Featured asset reassignment planning.
//!
//! Each category has at most one featured asset. The flag lives inside the
//! public id, so moving it is a set of renames: every other featured asset
//! in the category is demoted to `standard`, and the target is promoted to
//! `featured`. This module computes that set from a listing snapshot; it
//! does not talk to the remote host.
//!
//! The renames of one plan have no ordering relationship to each other and
//! are meant to be dispatched concurrently.

use crate::assets::{Asset, Category, ResourceKind};
use crate::public_id::{self, DEFAULT_FOLDER};

/// Why a rename was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameReason {
    /// A featured asset other than the target loses the flag.
    Demote,
    /// The target gains the flag.
    Promote,
}

/// One rename to issue against the remote host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOp {
    pub from_id: String,
    pub to_id: String,
    /// `None` when the kind is unknown and must be resolved by fallback.
    pub kind: Option<ResourceKind>,
    pub reason: RenameReason,
}

/// Result of planning a reassignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignmentPlan {
    /// Public id the target will have once every rename has been applied.
    pub featured_id: String,
    pub renames: Vec<RenameOp>,
}

impl ReassignmentPlan {
    /// True when the target is already the only featured asset.
    pub fn is_noop(&self) -> bool {
        self.renames.is_empty()
    }

    pub fn demotions(&self) -> impl Iterator<Item = &RenameOp> {
        self.renames
            .iter()
            .filter(|op| op.reason == RenameReason::Demote)
    }

    pub fn promotion(&self) -> Option<&RenameOp> {
        self.renames
            .iter()
            .find(|op| op.reason == RenameReason::Promote)
    }
}

/// Compute the renames that make `target_id` the sole featured asset of
/// `category`.
///
/// `target_kind` is the kind the caller knows for the target, if any. When it
/// is `None` the kind reported by the snapshot is used; when the target is
/// not in the snapshot either, the promotion carries no kind.
pub fn plan_reassignment(
    snapshot: &[Asset],
    category: Category,
    target_id: &str,
    target_kind: Option<ResourceKind>,
) -> ReassignmentPlan {
    let normalized_target = public_id::normalize(target_id);
    let target_meta = public_id::parse(&normalized_target);
    let featured_id = public_id::build(
        folder_or_default(&target_meta.prefix),
        category,
        true,
        &target_meta.rest_name,
    );

    let mut renames: Vec<RenameOp> = snapshot
        .iter()
        .filter(|asset| {
            asset.category == category && asset.featured && asset.public_id != normalized_target
        })
        .map(|asset| RenameOp {
            from_id: asset.public_id.clone(),
            to_id: public_id::build(
                folder_or_default(&asset.prefix),
                category,
                false,
                &asset.rest_name,
            ),
            kind: Some(asset.kind),
            reason: RenameReason::Demote,
        })
        .collect();

    if featured_id != normalized_target {
        let kind = target_kind.or_else(|| {
            snapshot
                .iter()
                .find(|asset| asset.public_id == normalized_target)
                .map(|asset| asset.kind)
        });
        renames.push(RenameOp {
            from_id: normalized_target,
            to_id: featured_id.clone(),
            kind,
            reason: RenameReason::Promote,
        });
    }

    ReassignmentPlan {
        featured_id,
        renames,
    }
}

fn folder_or_default(prefix: &str) -> &str {
    if prefix.is_empty() {
        DEFAULT_FOLDER
    } else {
        prefix
    }
}
