//! AccessMenuLinkDao trait: ordered access list to menu grants.

use async_trait::async_trait;
use portal_core::{AccessList, AccessListId, Interface, MenuItem, PortalResult};

/// Links access lists to menu items (`access_list_menu`).
#[async_trait]
pub trait AccessMenuLinkDao: Interface + Send + Sync {
    /// Lists the menu items of an access list by ascending link order.
    async fn list_by_access_list(&self, access_list_id: AccessListId) -> PortalResult<Vec<MenuItem>>;

    /// Grants `menu_item` to `access_list` at the item's order (0 if unset).
    async fn save(&self, access_list: &AccessList, menu_item: &MenuItem) -> PortalResult<AccessList>;

    /// Removes every menu link of the access list.
    async fn delete(&self, access_list_id: AccessListId) -> PortalResult<u64>;
}
