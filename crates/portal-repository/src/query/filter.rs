//! AND-combined predicates with a guard against unscoped deletes.

use super::{Table, TableNames};
use portal_core::{PortalError, PortalResult};
use sea_query::{ConditionalStatement, DeleteStatement, Expr, IntoColumnRef, Query, SimpleExpr};

/// Conjunction of predicates. An empty filter matches every row.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    predicates: Vec<SimpleExpr>,
}

impl Filter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn and(mut self, predicate: SimpleExpr) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Adds `column = value` only when a value is present.
    #[must_use]
    pub fn and_eq_opt<C: IntoColumnRef>(self, column: C, value: Option<i64>) -> Self {
        match value {
            Some(value) => self.and(Expr::col(column).eq(value)),
            None => self,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Appends every predicate to the statement's WHERE clause.
    pub fn apply<S: ConditionalStatement>(self, statement: &mut S) {
        for predicate in self.predicates {
            statement.and_where(predicate);
        }
    }

    /// Builds `DELETE FROM table WHERE ...`.
    ///
    /// Refuses to build without a predicate, so a missing filter can never
    /// empty the table.
    pub fn delete_from(self, tables: &TableNames, table: Table) -> PortalResult<DeleteStatement> {
        if self.is_empty() {
            return Err(PortalError::UnscopedDelete {
                table: tables.qualified(table),
            });
        }
        let mut delete = Query::delete();
        delete.from_table(tables.table_ref(table));
        self.apply(&mut delete);
        Ok(delete)
    }
}
