//! In-process asset host.
//!
//! Keeps resources in memory, records every call, and lets callers inject
//! failures. Used by the integration tests and for running the server
//! without a Cloudinary account.

use std::collections::HashMap;

use async_trait::async_trait;
use folio_core::assets::ResourceKind;
use folio_core::types::Timestamp;
use tokio::sync::Mutex;

use crate::error::HostError;
use crate::host::{AssetHost, RemoteResource, RenameOptions};

/// Timestamp assigned to the first seeded resource; later ones are one
/// second apart so listings sort deterministically.
const SEED_EPOCH_SECS: i64 = 1_700_000_000;

/// A call received by [`MemoryAssetHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    List {
        kind: ResourceKind,
        prefix: String,
        max_results: u32,
    },
    Rename {
        from_id: String,
        to_id: String,
        kind: ResourceKind,
        options: RenameOptions,
    },
    Destroy {
        public_id: String,
        kind: ResourceKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Operation {
    List,
    Rename,
    Destroy,
}

#[derive(Debug, Default)]
struct MemoryState {
    resources: Vec<RemoteResource>,
    calls: Vec<HostCall>,
    /// Injected failures keyed by operation, kind, and subject id (the
    /// prefix for listings, the source id for renames).
    failures: HashMap<(Operation, ResourceKind, String), String>,
    next_seed: i64,
}

impl MemoryState {
    fn position(&self, public_id: &str, kind: ResourceKind) -> Option<usize> {
        self.resources
            .iter()
            .position(|r| r.public_id == public_id && r.resource_type == kind.as_str())
    }

    fn injected(&self, op: Operation, kind: ResourceKind, subject: &str) -> Result<(), HostError> {
        match self.failures.get(&(op, kind, subject.to_string())) {
            Some(message) => Err(HostError::Api {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn push(&mut self, public_id: String, kind: ResourceKind, created_at: Option<Timestamp>) {
        let created_at = created_at
            .or_else(|| chrono::DateTime::from_timestamp(SEED_EPOCH_SECS + self.next_seed, 0));
        self.next_seed += 1;
        self.resources.push(RemoteResource {
            secure_url: Some(format!("https://memory.invalid/{kind}/upload/{public_id}")),
            public_id,
            resource_type: kind.as_str().to_string(),
            created_at,
        });
    }
}

/// An [`AssetHost`] backed by a vector of resources.
#[derive(Debug, Default)]
pub struct MemoryAssetHost {
    state: Mutex<MemoryState>,
}

impl MemoryAssetHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a resource (builder style).
    pub fn with_resource(mut self, public_id: impl Into<String>, kind: ResourceKind) -> Self {
        self.state.get_mut().push(public_id.into(), kind, None);
        self
    }

    /// Seed a resource with an explicit creation time (builder style).
    pub fn with_resource_at(
        mut self,
        public_id: impl Into<String>,
        kind: ResourceKind,
        created_at: Timestamp,
    ) -> Self {
        self.state
            .get_mut()
            .push(public_id.into(), kind, Some(created_at));
        self
    }

    /// Make listings of `kind` under `prefix` fail with `message`.
    pub fn with_list_failure(
        mut self,
        kind: ResourceKind,
        prefix: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.state
            .get_mut()
            .failures
            .insert((Operation::List, kind, prefix.into()), message.into());
        self
    }

    /// Make renames of `from_id` as `kind` fail with `message`.
    pub fn with_rename_failure(
        mut self,
        from_id: impl Into<String>,
        kind: ResourceKind,
        message: impl Into<String>,
    ) -> Self {
        self.state
            .get_mut()
            .failures
            .insert((Operation::Rename, kind, from_id.into()), message.into());
        self
    }

    /// Make deletions of `public_id` as `kind` fail with `message`.
    pub fn with_destroy_failure(
        mut self,
        public_id: impl Into<String>,
        kind: ResourceKind,
        message: impl Into<String>,
    ) -> Self {
        self.state
            .get_mut()
            .failures
            .insert((Operation::Destroy, kind, public_id.into()), message.into());
        self
    }

    /// Lift every injected failure; later calls behave normally.
    pub async fn clear_failures(&self) {
        self.state.lock().await.failures.clear();
    }

    /// Public ids currently stored, in insertion order.
    pub async fn public_ids(&self) -> Vec<String> {
        let state = self.state.lock().await;
        state.resources.iter().map(|r| r.public_id.clone()).collect()
    }

    /// Every call received so far.
    pub async fn calls(&self) -> Vec<HostCall> {
        self.state.lock().await.calls.clone()
    }

    /// Only the rename calls received so far.
    pub async fn rename_calls(&self) -> Vec<HostCall> {
        self.calls()
            .await
            .into_iter()
            .filter(|call| matches!(call, HostCall::Rename { .. }))
            .collect()
    }
}

#[async_trait]
impl AssetHost for MemoryAssetHost {
    async fn list_resources(
        &self,
        kind: ResourceKind,
        prefix: &str,
        max_results: u32,
    ) -> Result<Vec<RemoteResource>, HostError> {
        let mut state = self.state.lock().await;
        state.calls.push(HostCall::List {
            kind,
            prefix: prefix.to_string(),
            max_results,
        });
        state.injected(Operation::List, kind, prefix)?;

        Ok(state
            .resources
            .iter()
            .filter(|r| r.resource_type == kind.as_str() && r.public_id.starts_with(prefix))
            .take(max_results as usize)
            .cloned()
            .collect())
    }

    async fn rename(
        &self,
        from_id: &str,
        to_id: &str,
        kind: ResourceKind,
        options: RenameOptions,
    ) -> Result<(), HostError> {
        let mut state = self.state.lock().await;
        state.calls.push(HostCall::Rename {
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            kind,
            options,
        });
        state.injected(Operation::Rename, kind, from_id)?;

        let Some(index) = state.position(from_id, kind) else {
            return Err(HostError::Api {
                status: 404,
                message: format!("Resource not found - {from_id} ({kind})"),
            });
        };

        if from_id == to_id {
            return Ok(());
        }

        if let Some(existing) = state.position(to_id, kind) {
            if !options.overwrite {
                return Err(HostError::Api {
                    status: 409,
                    message: format!("Resource already exists - {to_id}"),
                });
            }
            state.resources.remove(existing);
        }

        // Removing the overwritten entry may have shifted the source.
        let index = state.position(from_id, kind).unwrap_or(index);
        let resource = &mut state.resources[index];
        resource.public_id = to_id.to_string();
        resource.secure_url = Some(format!("https://memory.invalid/{kind}/upload/{to_id}"));
        Ok(())
    }

    async fn destroy(&self, public_id: &str, kind: ResourceKind) -> Result<(), HostError> {
        let mut state = self.state.lock().await;
        state.calls.push(HostCall::Destroy {
            public_id: public_id.to_string(),
            kind,
        });
        state.injected(Operation::Destroy, kind, public_id)?;

        match state.position(public_id, kind) {
            Some(index) => {
                state.resources.remove(index);
                Ok(())
            }
            None => Err(HostError::NotFound {
                public_id: public_id.to_string(),
            }),
        }
    }
}
