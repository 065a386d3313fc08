//! Access list to menu link DAO.

use super::LogFailure;
use crate::dao::AccessMenuLinkDao;
use crate::query::{statement_error, As, ClassifierCol, Filter, LinkCol, MenuCol, Table, TableNames};
use crate::rows::{into_entities, MenuRow};
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use portal_core::{AccessList, AccessListId, MenuItem, PortalResult, PositiveId};
use sea_query::{
    ConditionalStatement, DeleteStatement, Expr, InsertStatement, JoinType, Order, Query, SelectStatement,
};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// MySQL/SQLite implementation of [`AccessMenuLinkDao`].
///
/// Menu items are read joined with their classifier and the link's order.
#[derive(Component, Clone)]
#[shaku(interface = AccessMenuLinkDao)]
pub struct AccessMenuLinkDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
    tables: TableNames,
}

impl AccessMenuLinkDaoImpl {
    /// Creates a new DAO on the given pool.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>, tables: TableNames) -> Self {
        Self { pool, tables }
    }
}

fn list_statement(tables: &TableNames, access_list_id: AccessListId) -> SelectStatement {
    let mut select = Query::select();
    select
        .columns([
            (As::Menu, MenuCol::MnuId),
            (As::Menu, MenuCol::MnuPath),
            (As::Menu, MenuCol::MnuUrl),
            (As::Menu, MenuCol::MnuDescription),
            (As::Menu, MenuCol::MnuIcon),
            (As::Menu, MenuCol::MnuRoot),
            (As::Menu, MenuCol::MnuVisible),
        ])
        .columns([
            (As::Classifier, ClassifierCol::ClaId),
            (As::Classifier, ClassifierCol::ClaValue),
            (As::Classifier, ClassifierCol::ClaType),
        ])
        .column((As::MenuLink, LinkCol::MnuOrder))
        .from_as(tables.table_ref(Table::Menu), As::Menu)
        .join_as(
            JoinType::InnerJoin,
            tables.table_ref(Table::Classifier),
            As::Classifier,
            Expr::col((As::Classifier, ClassifierCol::ClaId)).equals((As::Menu, MenuCol::ClaId)),
        )
        .join_as(
            JoinType::InnerJoin,
            tables.table_ref(Table::AccessListMenu),
            As::MenuLink,
            Expr::col((As::MenuLink, LinkCol::MnuId)).equals((As::Menu, MenuCol::MnuId)),
        )
        .and_where(Expr::col((As::MenuLink, LinkCol::AclId)).eq(access_list_id.value()))
        .order_by((As::MenuLink, LinkCol::MnuOrder), Order::Asc);
    select
}

fn insert_statement(
    tables: &TableNames,
    access_list: &AccessList,
    menu_item: &MenuItem,
) -> PortalResult<InsertStatement> {
    let mut insert = Query::insert();
    insert
        .into_table(tables.table_ref(Table::AccessListMenu))
        .columns([LinkCol::AclId, LinkCol::MnuId, LinkCol::MnuOrder])
        .values([
            access_list.id.value().into(),
            menu_item.id.value().into(),
            menu_item.link_order().into(),
        ])
        .map_err(statement_error)?;
    Ok(insert)
}

fn delete_statement(tables: &TableNames, access_list_id: AccessListId) -> PortalResult<DeleteStatement> {
    Filter::new()
        .and_eq_opt(LinkCol::AclId, Some(access_list_id).positive_only().map(AccessListId::value))
        .delete_from(tables, Table::AccessListMenu)
}

#[async_trait]
impl AccessMenuLinkDao for AccessMenuLinkDaoImpl {
    async fn list_by_access_list(&self, access_list_id: AccessListId) -> PortalResult<Vec<MenuItem>> {
        debug!(%access_list_id, "Listing menu items of access list");

        let select = list_statement(&self.tables, access_list_id);
        let rows: Vec<MenuRow> = self
            .pool
            .inner()
            .fetch_all(&select)
            .await
            .log_failure("access_menu_link.list_by_access_list")?;
        into_entities(rows).log_failure("access_menu_link.list_by_access_list")
    }

    async fn save(&self, access_list: &AccessList, menu_item: &MenuItem) -> PortalResult<AccessList> {
        debug!(
            access_list_id = %access_list.id,
            menu_id = %menu_item.id,
            order = menu_item.link_order(),
            "Linking menu item"
        );

        let insert = insert_statement(&self.tables, access_list, menu_item).log_failure("access_menu_link.save")?;
        self.pool
            .inner()
            .execute(&insert)
            .await
            .log_failure("access_menu_link.save")?;
        Ok(access_list.clone())
    }

    async fn delete(&self, access_list_id: AccessListId) -> PortalResult<u64> {
        debug!(%access_list_id, "Unlinking menu items");

        let delete = delete_statement(&self.tables, access_list_id).log_failure("access_menu_link.delete")?;
        self.pool
            .inner()
            .execute(&delete)
            .await
            .log_failure("access_menu_link.delete")
    }
}
