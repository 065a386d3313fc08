//! PasswordHistoryDao trait.

use async_trait::async_trait;
use portal_core::{Interface, PasswordHistoryEntry, PortalResult, UserId};

/// Previous password hashes per user (`pass_hist`).
#[async_trait]
pub trait PasswordHistoryDao: Interface + Send + Sync {
    /// Returns at most `limit` entries, newest first.
    async fn list_recent_by_user(&self, user_id: UserId, limit: u32) -> PortalResult<Vec<PasswordHistoryEntry>>;

    /// Returns every entry of the user.
    async fn list_all_by_user(&self, user_id: UserId) -> PortalResult<Vec<PasswordHistoryEntry>>;

    /// Inserts the entry and stores the generated id on it.
    async fn save(&self, entry: &mut PasswordHistoryEntry) -> PortalResult<PasswordHistoryEntry>;

    /// Deletes every entry of the user.
    async fn delete_all_by_user(&self, user_id: UserId) -> PortalResult<u64>;

    /// Deletes all but the `keep` newest entries of the user.
    async fn prune_by_user(&self, user_id: UserId, keep: u32) -> PortalResult<u64>;
}
