//! # Portal Repository
//!
//! Data access for the portal's access control and account tables:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn AccessMenuLinkDao>       (DAO interface)
//! AccessMenuLinkDaoImpl                (DAO impl, builds sea-query statements)
//!   ↓  Arc<dyn DatabasePoolInterface>   (pool interface)
//! PortalPool::MySql / PortalPool::Sqlite
//!   ↓
//! MySQL / SQLite
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs              ← DatabasePool, PortalPool
//!   executor.rs          ← statement execution per backend
//!   query/               ← table and column identifiers, Filter
//!   rows.rs              ← FromRow row types → entities
//!   dao/
//!     *_dao.rs           ← DAO traits
//!     impl/              ← DAO implementations
//!   di.rs                ← Shaku module
//! ```
//!
//! Errors are [`PortalError`](portal_core::PortalError); callers fold them
//! into a localized [`OperationFailure`](portal_core::OperationFailure) with
//! [`LocalizeResult::localized`](portal_core::LocalizeResult::localized).

pub mod dao;
pub mod di;
mod executor;
pub mod pool;
pub mod query;
mod rows;

pub use dao::*;
pub use di::*;
pub use pool::*;
pub use query::{Filter, Table, TableNames};
