//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module. The implementations
//! build sea-query statements and run them on the injected
//! [`DatabasePoolInterface`](crate::DatabasePoolInterface), rendered for
//! whichever backend the pool connects to.

mod access_checkpoint_link_dao_impl;
mod access_menu_link_dao_impl;
mod password_history_dao_impl;

pub use access_checkpoint_link_dao_impl::{AccessCheckpointLinkDaoImpl, AccessCheckpointLinkDaoImplParameters};
pub use access_menu_link_dao_impl::{AccessMenuLinkDaoImpl, AccessMenuLinkDaoImplParameters};
pub use password_history_dao_impl::{PasswordHistoryDaoImpl, PasswordHistoryDaoImplParameters};

use portal_core::PortalResult;
use tracing::error;

/// Logs a failed DAO operation with its original error.
pub(crate) trait LogFailure<T> {
    fn log_failure(self, operation: &'static str) -> PortalResult<T>;
}

impl<T> LogFailure<T> for PortalResult<T> {
    fn log_failure(self, operation: &'static str) -> PortalResult<T> {
        self.map_err(|e| {
            error!(operation, kind = %e.kind(), error = %e, "DAO operation failed");
            e
        })
    }
}
