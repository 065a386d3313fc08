//! Integration tests for AccessMenuLinkDaoImpl against an in-memory database.

mod common;

use common::{access_list, TestPortal};
use portal_core::{AccessListId, ErrorKind};
use portal_repository::{AccessMenuLinkDao, AccessMenuLinkDaoImpl};

fn dao(db: &TestPortal) -> AccessMenuLinkDaoImpl {
    AccessMenuLinkDaoImpl::new(db.pool(), db.tables())
}

#[tokio::test]
async fn test_list_is_ordered_by_link_order() {
    let db = TestPortal::new().await;
    let dao = dao(&db);
    let main = db.seed_classifier("MAIN").await;
    let reports = db.seed_menu("reports", &main).await;
    let users = db.seed_menu("users", &main).await;
    let audit = db.seed_menu("audit", &main).await;

    dao.save(&access_list(1), &reports.clone().with_order(3)).await.unwrap();
    dao.save(&access_list(1), &users.clone().with_order(1)).await.unwrap();
    dao.save(&access_list(1), &audit.clone().with_order(2)).await.unwrap();
    dao.save(&access_list(2), &reports.clone().with_order(0)).await.unwrap();

    let items = dao.list_by_access_list(AccessListId(1)).await.unwrap();

    let paths: Vec<&str> = items.iter().map(|item| item.path.as_str()).collect();
    assert_eq!(paths, vec!["users", "audit", "reports"]);
    let orders: Vec<Option<i32>> = items.iter().map(|item| item.order).collect();
    assert_eq!(orders, vec![Some(1), Some(2), Some(3)]);
}

#[tokio::test]
async fn test_list_maps_menu_and_classifier() {
    let db = TestPortal::new().await;
    let dao = dao(&db);
    let main = db.seed_classifier("MAIN").await;
    let reports = db.seed_menu("reports", &main).await;

    dao.save(&access_list(1), &reports).await.unwrap();

    let items = dao.list_by_access_list(AccessListId(1)).await.unwrap();
    assert_eq!(items, vec![reports.with_order(0)]);
    assert!(items[0].is_top_level());
    assert!(items[0].visible);
    assert_eq!(items[0].classifier, main);
}

#[tokio::test]
async fn test_list_for_unknown_access_list_is_empty() {
    let db = TestPortal::new().await;

    let items = dao(&db).list_by_access_list(AccessListId(99)).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_duplicate_save_adds_second_row() {
    let db = TestPortal::new().await;
    let dao = dao(&db);
    let main = db.seed_classifier("MAIN").await;
    let reports = db.seed_menu("reports", &main).await;

    dao.save(&access_list(1), &reports).await.unwrap();
    dao.save(&access_list(1), &reports).await.unwrap();

    assert_eq!(db.count("access_list_menu").await, 2);
    assert_eq!(dao.list_by_access_list(AccessListId(1)).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_removes_only_that_access_list() {
    let db = TestPortal::new().await;
    let dao = dao(&db);
    let main = db.seed_classifier("MAIN").await;
    let reports = db.seed_menu("reports", &main).await;
    let users = db.seed_menu("users", &main).await;
    for list in [1, 2] {
        dao.save(&access_list(list), &reports).await.unwrap();
        dao.save(&access_list(list), &users).await.unwrap();
    }

    assert_eq!(dao.delete(AccessListId(1)).await.unwrap(), 2);
    assert!(dao.list_by_access_list(AccessListId(1)).await.unwrap().is_empty());
    assert_eq!(dao.list_by_access_list(AccessListId(2)).await.unwrap().len(), 2);

    let err = dao.delete(AccessListId(0)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnscopedDelete);
    assert_eq!(db.count("access_list_menu").await, 2);
}
