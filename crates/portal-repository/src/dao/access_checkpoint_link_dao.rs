//! AccessCheckpointLinkDao trait: access list to checkpoint grants.

use async_trait::async_trait;
use portal_core::{AccessList, AccessListId, Checkpoint, CheckpointId, Interface, PortalResult};

/// Links access lists to checkpoints (`access_list_checkpoint`).
#[async_trait]
pub trait AccessCheckpointLinkDao: Interface + Send + Sync {
    /// Lists linked checkpoints.
    ///
    /// Each filter applies only when present and positive; with neither,
    /// every checkpoint that has at least one link is returned (once per
    /// link).
    async fn list_by_filter(
        &self,
        checkpoint_id: Option<CheckpointId>,
        access_list_id: Option<AccessListId>,
    ) -> PortalResult<Vec<Checkpoint>>;

    /// Grants `checkpoint` to `access_list`. Duplicate grants add a
    /// second row.
    async fn save(&self, access_list: &AccessList, checkpoint: &Checkpoint) -> PortalResult<AccessList>;

    /// Revokes matching links and returns the number removed.
    ///
    /// Fails with [`PortalError::UnscopedDelete`](portal_core::PortalError::UnscopedDelete)
    /// when no usable filter is given.
    async fn delete(
        &self,
        checkpoint_id: Option<CheckpointId>,
        access_list_id: Option<AccessListId>,
    ) -> PortalResult<u64>;
}
