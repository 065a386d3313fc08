//! Password history DAO.

use super::LogFailure;
use crate::dao::PasswordHistoryDao;
use crate::query::{statement_error, Filter, PassHistCol, Table, TableNames};
use crate::rows::{into_entities, PassHistKeyRow, PassHistRow};
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use portal_core::{PasswordHistoryEntry, PasswordHistoryId, PortalError, PortalResult, PositiveId, UserId};
use sea_query::{ConditionalStatement, DeleteStatement, Expr, InsertStatement, Order, Query, SelectStatement};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// MySQL/SQLite implementation of [`PasswordHistoryDao`].
#[derive(Component, Clone)]
#[shaku(interface = PasswordHistoryDao)]
pub struct PasswordHistoryDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
    tables: TableNames,
}

impl PasswordHistoryDaoImpl {
    /// Creates a new DAO on the given pool.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>, tables: TableNames) -> Self {
        Self { pool, tables }
    }

    fn scoped_user(&self, user_id: UserId) -> PortalResult<UserId> {
        Some(user_id).positive_only().ok_or_else(|| PortalError::UnscopedDelete {
            table: self.tables.qualified(Table::PassHist),
        })
    }
}

fn select_by_user(tables: &TableNames, user_id: UserId) -> SelectStatement {
    let mut select = Query::select();
    select
        .columns([
            PassHistCol::PasId,
            PassHistCol::Password,
            PassHistCol::ChangeDate,
            PassHistCol::UsrId,
        ])
        .from(tables.table_ref(Table::PassHist))
        .and_where(Expr::col(PassHistCol::UsrId).eq(user_id.value()));
    select
}

fn newest_first(mut select: SelectStatement, limit: u32) -> SelectStatement {
    select
        .order_by(PassHistCol::ChangeDate, Order::Desc)
        .order_by(PassHistCol::PasId, Order::Desc)
        .limit(u64::from(limit));
    select
}

fn insert_statement(tables: &TableNames, entry: &PasswordHistoryEntry) -> PortalResult<InsertStatement> {
    let mut insert = Query::insert();
    insert
        .into_table(tables.table_ref(Table::PassHist))
        .columns([PassHistCol::Password, PassHistCol::ChangeDate, PassHistCol::UsrId])
        .values([
            entry.password.as_str().into(),
            entry.change_date.into(),
            entry.user_id.value().into(),
        ])
        .map_err(statement_error)?;
    Ok(insert)
}

/// Key-only select of the `keep` newest entries.
fn kept_keys_statement(tables: &TableNames, user_id: UserId, keep: u32) -> SelectStatement {
    let mut select = Query::select();
    select
        .column(PassHistCol::PasId)
        .from(tables.table_ref(Table::PassHist))
        .and_where(Expr::col(PassHistCol::UsrId).eq(user_id.value()));
    newest_first(select, keep)
}

fn delete_statement(tables: &TableNames, user_id: UserId, keep_ids: Vec<i64>) -> PortalResult<DeleteStatement> {
    let filter = Filter::new().and_eq_opt(PassHistCol::UsrId, Some(user_id).positive_only().map(UserId::value));
    let filter = if keep_ids.is_empty() {
        filter
    } else {
        filter.and(Expr::col(PassHistCol::PasId).is_not_in(keep_ids))
    };
    filter.delete_from(tables, Table::PassHist)
}

#[async_trait]
impl PasswordHistoryDao for PasswordHistoryDaoImpl {
    async fn list_recent_by_user(&self, user_id: UserId, limit: u32) -> PortalResult<Vec<PasswordHistoryEntry>> {
        debug!(%user_id, limit, "Listing recent password history");

        let select = newest_first(select_by_user(&self.tables, user_id), limit);
        let rows: Vec<PassHistRow> = self
            .pool
            .inner()
            .fetch_all(&select)
            .await
            .log_failure("password_history.list_recent_by_user")?;
        into_entities(rows).log_failure("password_history.list_recent_by_user")
    }

    async fn list_all_by_user(&self, user_id: UserId) -> PortalResult<Vec<PasswordHistoryEntry>> {
        debug!(%user_id, "Listing password history");

        let select = select_by_user(&self.tables, user_id);
        let rows: Vec<PassHistRow> = self
            .pool
            .inner()
            .fetch_all(&select)
            .await
            .log_failure("password_history.list_all_by_user")?;
        into_entities(rows).log_failure("password_history.list_all_by_user")
    }

    async fn save(&self, entry: &mut PasswordHistoryEntry) -> PortalResult<PasswordHistoryEntry> {
        debug!(user_id = %entry.user_id, "Saving password history entry");

        let insert = insert_statement(&self.tables, entry).log_failure("password_history.save")?;
        let id = self
            .pool
            .inner()
            .insert(&insert)
            .await
            .log_failure("password_history.save")?;

        entry.id = Some(PasswordHistoryId(id));
        Ok(entry.clone())
    }

    async fn delete_all_by_user(&self, user_id: UserId) -> PortalResult<u64> {
        debug!(%user_id, "Deleting password history");

        let delete = delete_statement(&self.tables, user_id, Vec::new())
            .log_failure("password_history.delete_all_by_user")?;
        self.pool
            .inner()
            .execute(&delete)
            .await
            .log_failure("password_history.delete_all_by_user")
    }

    async fn prune_by_user(&self, user_id: UserId, keep: u32) -> PortalResult<u64> {
        const OPERATION: &str = "password_history.prune_by_user";
        debug!(%user_id, keep, "Pruning password history");

        let user_id = self.scoped_user(user_id).log_failure(OPERATION)?;

        // MySQL rejects LIMIT inside an IN subquery, so resolve the ids first
        let keep_ids = if keep == 0 {
            Vec::new()
        } else {
            let select = kept_keys_statement(&self.tables, user_id, keep);
            let rows: Vec<PassHistKeyRow> = self.pool.inner().fetch_all(&select).await.log_failure(OPERATION)?;
            rows.into_iter().map(|row| row.pas_id).collect()
        };

        let delete = delete_statement(&self.tables, user_id, keep_ids).log_failure(OPERATION)?;
        self.pool.inner().execute(&delete).await.log_failure(OPERATION)
    }
}
