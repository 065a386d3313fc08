//! Access list to checkpoint link DAO.

use super::LogFailure;
use crate::dao::AccessCheckpointLinkDao;
use crate::query::{statement_error, As, CheckpointCol, Filter, LinkCol, Table, TableNames};
use crate::rows::{into_entities, CheckpointRow};
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use portal_core::{AccessList, AccessListId, Checkpoint, CheckpointId, PortalResult, PositiveId};
use sea_query::{DeleteStatement, Expr, InsertStatement, IntoColumnRef, JoinType, Order, Query, SelectStatement};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// MySQL/SQLite implementation of [`AccessCheckpointLinkDao`].
#[derive(Component, Clone)]
#[shaku(interface = AccessCheckpointLinkDao)]
pub struct AccessCheckpointLinkDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
    tables: TableNames,
}

impl AccessCheckpointLinkDaoImpl {
    /// Creates a new DAO on the given pool.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>, tables: TableNames) -> Self {
        Self { pool, tables }
    }
}

/// Positive ids become `column = id` predicates; anything else is ignored.
fn link_filter(
    checkpoint_col: impl IntoColumnRef,
    access_list_col: impl IntoColumnRef,
    checkpoint_id: Option<CheckpointId>,
    access_list_id: Option<AccessListId>,
) -> Filter {
    Filter::new()
        .and_eq_opt(checkpoint_col, checkpoint_id.positive_only().map(CheckpointId::value))
        .and_eq_opt(access_list_col, access_list_id.positive_only().map(AccessListId::value))
}

fn list_statement(
    tables: &TableNames,
    checkpoint_id: Option<CheckpointId>,
    access_list_id: Option<AccessListId>,
) -> SelectStatement {
    let mut select = Query::select();
    select
        .columns([
            (As::Checkpoint, CheckpointCol::CkpId),
            (As::Checkpoint, CheckpointCol::Name),
            (As::Checkpoint, CheckpointCol::Description),
        ])
        .from_as(tables.table_ref(Table::Checkpoint), As::Checkpoint)
        .join_as(
            JoinType::InnerJoin,
            tables.table_ref(Table::AccessListCheckpoint),
            As::CheckpointLink,
            Expr::col((As::CheckpointLink, LinkCol::CkpId)).equals((As::Checkpoint, CheckpointCol::CkpId)),
        )
        .order_by((As::Checkpoint, CheckpointCol::CkpId), Order::Asc);
    link_filter(
        (As::CheckpointLink, LinkCol::CkpId),
        (As::CheckpointLink, LinkCol::AclId),
        checkpoint_id,
        access_list_id,
    )
    .apply(&mut select);
    select
}

fn insert_statement(
    tables: &TableNames,
    access_list: &AccessList,
    checkpoint: &Checkpoint,
) -> PortalResult<InsertStatement> {
    let mut insert = Query::insert();
    insert
        .into_table(tables.table_ref(Table::AccessListCheckpoint))
        .columns([LinkCol::AclId, LinkCol::CkpId])
        .values([access_list.id.value().into(), checkpoint.id.value().into()])
        .map_err(statement_error)?;
    Ok(insert)
}

fn delete_statement(
    tables: &TableNames,
    checkpoint_id: Option<CheckpointId>,
    access_list_id: Option<AccessListId>,
) -> PortalResult<DeleteStatement> {
    link_filter(LinkCol::CkpId, LinkCol::AclId, checkpoint_id, access_list_id)
        .delete_from(tables, Table::AccessListCheckpoint)
}

#[async_trait]
impl AccessCheckpointLinkDao for AccessCheckpointLinkDaoImpl {
    async fn list_by_filter(
        &self,
        checkpoint_id: Option<CheckpointId>,
        access_list_id: Option<AccessListId>,
    ) -> PortalResult<Vec<Checkpoint>> {
        debug!(?checkpoint_id, ?access_list_id, "Listing linked checkpoints");

        let select = list_statement(&self.tables, checkpoint_id, access_list_id);
        let rows: Vec<CheckpointRow> = self
            .pool
            .inner()
            .fetch_all(&select)
            .await
            .log_failure("access_checkpoint_link.list_by_filter")?;
        into_entities(rows).log_failure("access_checkpoint_link.list_by_filter")
    }

    async fn save(&self, access_list: &AccessList, checkpoint: &Checkpoint) -> PortalResult<AccessList> {
        debug!(access_list_id = %access_list.id, checkpoint_id = %checkpoint.id, "Linking checkpoint");

        let insert =
            insert_statement(&self.tables, access_list, checkpoint).log_failure("access_checkpoint_link.save")?;
        self.pool
            .inner()
            .execute(&insert)
            .await
            .log_failure("access_checkpoint_link.save")?;
        Ok(access_list.clone())
    }

    async fn delete(
        &self,
        checkpoint_id: Option<CheckpointId>,
        access_list_id: Option<AccessListId>,
    ) -> PortalResult<u64> {
        debug!(?checkpoint_id, ?access_list_id, "Unlinking checkpoints");

        let delete =
            delete_statement(&self.tables, checkpoint_id, access_list_id).log_failure("access_checkpoint_link.delete")?;
        self.pool
            .inner()
            .execute(&delete)
            .await
            .log_failure("access_checkpoint_link.delete")
    }
}
