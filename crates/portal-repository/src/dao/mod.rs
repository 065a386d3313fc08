//! DAO (Data Access Object) layer.
//!
//! Each DAO owns one table relationship and talks to the database only
//! through the injected [`DatabasePoolInterface`](crate::DatabasePoolInterface).
//!
//! Hierarchy:
//! ```text
//! Service → DAO (interface + impl) → DatabasePool → DB
//! ```

pub mod access_checkpoint_link_dao;
pub mod access_menu_link_dao;
pub mod r#impl;
pub mod password_history_dao;

pub use access_checkpoint_link_dao::AccessCheckpointLinkDao;
pub use access_menu_link_dao::AccessMenuLinkDao;
pub use password_history_dao::PasswordHistoryDao;
pub use r#impl::{
    AccessCheckpointLinkDaoImpl, AccessCheckpointLinkDaoImplParameters, AccessMenuLinkDaoImpl,
    AccessMenuLinkDaoImplParameters, PasswordHistoryDaoImpl, PasswordHistoryDaoImplParameters,
};
