//! Domain entities of the portal's access control and account tables.

pub mod entities;

pub use entities::*;
