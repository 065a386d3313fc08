//! Common test infrastructure for database integration tests.

#![allow(dead_code)]

#[cfg(feature = "mysql-tests")]
pub mod mysql;

use portal_core::{
    AccessList, AccessListId, Checkpoint, CheckpointId, Classifier, ClassifierId, MenuId, MenuItem,
};
use portal_repository::{DatabasePool, DatabasePoolInterface, PortalPool, TableNames};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Prefix used by the embedded schema; `main` is SQLite's default schema.
pub const PREFIX: &str = "main.";

const SCHEMA: &[&str] = &[
    "CREATE TABLE {p}classifier (
        cla_id INTEGER PRIMARY KEY AUTOINCREMENT,
        cla_value TEXT NOT NULL,
        cla_type TEXT NOT NULL
    )",
    "CREATE TABLE {p}checkpoint (
        ckp_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT
    )",
    "CREATE TABLE {p}menu (
        mnu_id INTEGER PRIMARY KEY AUTOINCREMENT,
        mnu_path TEXT NOT NULL,
        mnu_url TEXT,
        mnu_description TEXT,
        mnu_icon TEXT,
        mnu_root INTEGER NOT NULL DEFAULT 0,
        mnu_visible BOOLEAN NOT NULL DEFAULT 1,
        cla_id INTEGER NOT NULL REFERENCES classifier (cla_id)
    )",
    "CREATE TABLE {p}access_list_checkpoint (
        acl_id INTEGER NOT NULL,
        ckp_id INTEGER NOT NULL
    )",
    "CREATE TABLE {p}access_list_menu (
        acl_id INTEGER NOT NULL,
        mnu_id INTEGER NOT NULL,
        mnu_order INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE {p}pass_hist (
        pas_id INTEGER PRIMARY KEY AUTOINCREMENT,
        password TEXT NOT NULL,
        change_date DATETIME NOT NULL,
        usr_id INTEGER NOT NULL
    )",
];

/// In-memory portal database with the full schema.
pub struct TestPortal {
    pool: Arc<DatabasePool>,
    tables: TableNames,
}

impl TestPortal {
    /// Creates a fresh database and applies the schema.
    pub async fn new() -> Self {
        portal_core::telemetry::init_test_tracing();

        let pool = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");
        let portal = Self {
            pool: Arc::new(pool),
            tables: TableNames::new(PREFIX).expect("valid prefix"),
        };
        for statement in SCHEMA {
            sqlx::query(&statement.replace("{p}", PREFIX))
                .execute(portal.sqlite())
                .await
                .expect("Failed to create schema");
        }
        portal
    }

    pub fn pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.pool.clone()
    }

    pub fn database(&self) -> &DatabasePool {
        &self.pool
    }

    /// Raw SQLite handle for seeding and inspection.
    pub fn sqlite(&self) -> &SqlitePool {
        match self.pool.inner() {
            PortalPool::Sqlite(pool) => pool,
            PortalPool::MySql(_) => unreachable!("test portal is always SQLite"),
        }
    }

    pub fn tables(&self) -> TableNames {
        self.tables.clone()
    }

    /// Counts rows in an unprefixed table name.
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {PREFIX}{table}"))
            .fetch_one(self.sqlite())
            .await
            .expect("Failed to count rows")
    }

    pub async fn seed_checkpoint(&self, name: &str) -> Checkpoint {
        let description = format!("{name} checkpoint");
        let id = sqlx::query(&format!(
            "INSERT INTO {PREFIX}checkpoint (name, description) VALUES (?, ?)"
        ))
        .bind(name)
        .bind(&description)
        .execute(self.sqlite())
        .await
        .expect("Failed to seed checkpoint")
        .last_insert_rowid();
        Checkpoint::new(CheckpointId(id), name, Some(description))
    }

    pub async fn seed_classifier(&self, value: &str) -> Classifier {
        let id = sqlx::query(&format!(
            "INSERT INTO {PREFIX}classifier (cla_value, cla_type) VALUES (?, 'MENU_GROUP')"
        ))
        .bind(value)
        .execute(self.sqlite())
        .await
        .expect("Failed to seed classifier")
        .last_insert_rowid();
        Classifier::new(ClassifierId(id), value, "MENU_GROUP")
    }

    pub async fn seed_menu(&self, path: &str, classifier: &Classifier) -> MenuItem {
        let id = sqlx::query(&format!(
            "INSERT INTO {PREFIX}menu (mnu_path, mnu_url, mnu_icon, cla_id) VALUES (?, ?, 'folder', ?)"
        ))
        .bind(path)
        .bind(format!("/{path}"))
        .bind(classifier.id.value())
        .execute(self.sqlite())
        .await
        .expect("Failed to seed menu")
        .last_insert_rowid();

        let mut item = MenuItem::new(MenuId(id), path, classifier.clone());
        item.url = Some(format!("/{path}"));
        item.icon = Some("folder".to_string());
        item
    }
}

pub fn access_list(id: i64) -> AccessList {
    AccessList::new(AccessListId(id), format!("access list {id}"))
}
