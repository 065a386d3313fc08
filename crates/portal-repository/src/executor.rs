//! Statement execution.
//!
//! Statements are built once with sea-query and rendered for the backend
//! of the pool they run on. Values are always bound, never inlined.

use crate::PortalPool;
use portal_core::{PortalError, PortalResult};
use sea_query::{InsertStatement, MysqlQueryBuilder, SelectStatement, SqliteQueryBuilder};
use sea_query_binder::SqlxBinder;
use sqlx::mysql::MySqlRow;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;
use tracing::trace;

impl PortalPool {
    /// Runs a select and maps every row into `T`.
    pub async fn fetch_all<T>(&self, statement: &SelectStatement) -> PortalResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, MySqlRow> + for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let rows = match self {
            Self::MySql(pool) => {
                let (sql, values) = statement.build_sqlx(MysqlQueryBuilder);
                trace!(%sql, "fetch_all");
                sqlx::query_as_with::<_, T, _>(&sql, values).fetch_all(pool).await?
            }
            Self::Sqlite(pool) => {
                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                trace!(%sql, "fetch_all");
                sqlx::query_as_with::<_, T, _>(&sql, values).fetch_all(pool).await?
            }
        };
        Ok(rows)
    }

    /// Runs an update or delete and returns the affected row count.
    pub async fn execute<S>(&self, statement: &S) -> PortalResult<u64>
    where
        S: SqlxBinder + Sync,
    {
        let affected = match self {
            Self::MySql(pool) => {
                let (sql, values) = statement.build_sqlx(MysqlQueryBuilder);
                trace!(%sql, "execute");
                sqlx::query_with(&sql, values).execute(pool).await?.rows_affected()
            }
            Self::Sqlite(pool) => {
                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                trace!(%sql, "execute");
                sqlx::query_with(&sql, values).execute(pool).await?.rows_affected()
            }
        };
        Ok(affected)
    }

    /// Runs an insert and returns the generated key.
    pub async fn insert(&self, statement: &InsertStatement) -> PortalResult<i64> {
        match self {
            Self::MySql(pool) => {
                let (sql, values) = statement.build_sqlx(MysqlQueryBuilder);
                trace!(%sql, "insert");
                let id = sqlx::query_with(&sql, values).execute(pool).await?.last_insert_id();
                i64::try_from(id)
                    .map_err(|_| PortalError::mapping(format!("generated key {id} out of range")))
            }
            Self::Sqlite(pool) => {
                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                trace!(%sql, "insert");
                Ok(sqlx::query_with(&sql, values)
                    .execute(pool)
                    .await?
                    .last_insert_rowid())
            }
        }
    }
}
