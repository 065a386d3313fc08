//! DAO tests against a real MySQL server.
//!
//! Requires Docker; run with `--features mysql-tests`.

#![cfg(feature = "mysql-tests")]

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::access_list;
use common::mysql::TestDatabase;
use portal_core::{AccessListId, Checkpoint, CheckpointId, ErrorKind, MenuId, PasswordHistoryEntry, UserId};
use portal_repository::{
    AccessCheckpointLinkDao, AccessCheckpointLinkDaoImpl, AccessMenuLinkDao, AccessMenuLinkDaoImpl,
    PasswordHistoryDao, PasswordHistoryDaoImpl, TableNames,
};

#[tokio::test]
async fn test_checkpoint_links_round_trip() {
    let db = TestDatabase::new().await;
    let checkpoint_id = sqlx::query("INSERT INTO checkpoint (name) VALUES (?)")
        .bind("export")
        .execute(db.mysql())
        .await
        .unwrap()
        .last_insert_id();
    let dao = AccessCheckpointLinkDaoImpl::new(db.pool(), TableNames::default());

    let checkpoint = Checkpoint::new(CheckpointId(checkpoint_id as i64), "export", None);
    dao.save(&access_list(1), &checkpoint).await.unwrap();
    dao.save(&access_list(1), &checkpoint).await.unwrap();

    let found = dao.list_by_filter(None, Some(AccessListId(1))).await.unwrap();
    assert_eq!(found, vec![checkpoint.clone(), checkpoint]);

    assert_eq!(dao.delete(None, None).await.unwrap_err().kind(), ErrorKind::UnscopedDelete);
    assert_eq!(dao.delete(None, Some(AccessListId(1))).await.unwrap(), 2);
}

#[tokio::test]
async fn test_menu_links_decode_mysql_types() {
    let db = TestDatabase::new().await;
    let cla_id = sqlx::query("INSERT INTO classifier (cla_value, cla_type) VALUES ('MAIN', 'MENU_GROUP')")
        .execute(db.mysql())
        .await
        .unwrap()
        .last_insert_id();
    let mnu_id = sqlx::query("INSERT INTO menu (mnu_path, mnu_visible, cla_id) VALUES ('reports', FALSE, ?)")
        .bind(cla_id)
        .execute(db.mysql())
        .await
        .unwrap()
        .last_insert_id();
    sqlx::query("INSERT INTO access_list_menu (acl_id, mnu_id, mnu_order) VALUES (1, ?, 4)")
        .bind(mnu_id)
        .execute(db.mysql())
        .await
        .unwrap();
    let dao = AccessMenuLinkDaoImpl::new(db.pool(), TableNames::default());

    let items = dao.list_by_access_list(AccessListId(1)).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, MenuId(mnu_id as i64));
    assert!(!items[0].visible);
    assert_eq!(items[0].order, Some(4));
    assert_eq!(items[0].classifier.value, "MAIN");
}

#[tokio::test]
async fn test_password_history_on_mysql() {
    let db = TestDatabase::new().await;
    let dao = PasswordHistoryDaoImpl::new(db.pool(), TableNames::default());
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    for n in 0..5 {
        let mut entry = PasswordHistoryEntry::at(UserId(3), format!("hash-{n}"), start + Duration::days(n));
        dao.save(&mut entry).await.unwrap();
        assert!(entry.is_persisted());
    }

    let recent = dao.list_recent_by_user(UserId(3), 3).await.unwrap();
    let passwords: Vec<&str> = recent.iter().map(|e| e.password.as_str()).collect();
    assert_eq!(passwords, vec!["hash-4", "hash-3", "hash-2"]);
    assert_eq!(recent[0].change_date, start + Duration::days(4));

    assert_eq!(dao.prune_by_user(UserId(3), 2).await.unwrap(), 3);
    assert_eq!(dao.delete_all_by_user(UserId(3)).await.unwrap(), 2);
}
