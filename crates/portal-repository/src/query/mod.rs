//! Statement building on top of sea-query.

mod filter;
mod schema;

pub use filter::Filter;
pub use schema::{As, CheckpointCol, ClassifierCol, LinkCol, MenuCol, PassHistCol, Table, TableNames};

use portal_core::PortalError;

pub(crate) fn statement_error(err: sea_query::error::Error) -> PortalError {
    PortalError::statement(err.to_string())
}
