//! Migration and SeaORM repository tests on in-memory SQLite

mod common;

use common::{fixture_one, fixture_two, setup_test_db};
use sea_orm_migration::SchemaManager;
use tiers::domain::{RepositoryError, TiersRepository};
use tiers::infra::storage::SeaOrmTiersRepository;
use tiers::{NewTier, TiersModule};

#[tokio::test]
async fn test_migration_creates_table_and_unique_index() {
    let db = setup_test_db().await;
    let manager = SchemaManager::new(&*db);

    assert!(manager.has_table("tiers").await.unwrap());
    assert!(manager
        .has_index("tiers", "index_tiers_on_number")
        .await
        .unwrap());
}

#[tokio::test]
async fn test_migration_is_reversible() {
    let db = setup_test_db().await;
    let module = TiersModule::default();

    module.rollback(&db).await.expect("rollback");
    assert!(!SchemaManager::new(&*db).has_table("tiers").await.unwrap());

    module.migrate(&db).await.expect("migrate again");
    assert!(SchemaManager::new(&*db).has_table("tiers").await.unwrap());
}

#[tokio::test]
async fn test_unique_index_rejects_duplicate_number_on_insert() {
    let repo = SeaOrmTiersRepository::new(setup_test_db().await);
    let now = chrono::Utc::now();
    repo.insert(&fixture_one(), now).await.expect("first insert");

    let result = repo.insert(&fixture_one(), now).await;

    assert!(matches!(result, Err(RepositoryError::DuplicateNumber(1))));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_null_numbers_are_not_unique_violations() {
    let repo = SeaOrmTiersRepository::new(setup_test_db().await);
    let now = chrono::Utc::now();

    repo.insert(&NewTier::default(), now).await.expect("first");
    repo.insert(&NewTier::default(), now).await.expect("second");

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_unique_index_rejects_duplicate_number_on_update() {
    let repo = SeaOrmTiersRepository::new(setup_test_db().await);
    let now = chrono::Utc::now();
    repo.insert(&fixture_one(), now).await.expect("one");
    let mut two = repo.insert(&fixture_two(), now).await.expect("two");

    two.number = Some(1);
    let result = repo.update(&two).await;

    assert!(matches!(result, Err(RepositoryError::DuplicateNumber(1))));
    let stored = repo.find_by_id(two.id).await.unwrap().unwrap();
    assert_eq!(stored.number, Some(2));
}

#[tokio::test]
async fn test_update_of_deleted_row_is_not_found() {
    let repo = SeaOrmTiersRepository::new(setup_test_db().await);
    let tier = repo
        .insert(&fixture_one(), chrono::Utc::now())
        .await
        .expect("insert");
    assert!(repo.delete(tier.id).await.unwrap());

    let result = repo.update(&tier).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(id)) if id == tier.id));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_stores_cleared_columns_as_null() {
    let repo = SeaOrmTiersRepository::new(setup_test_db().await);
    let mut tier = repo
        .insert(&fixture_one(), chrono::Utc::now())
        .await
        .expect("insert");

    tier.number = None;
    tier.notes = None;
    repo.update(&tier).await.expect("update");

    let stored = repo.find_by_id(tier.id).await.unwrap().unwrap();
    assert_eq!(stored.number, None);
    assert_eq!(stored.notes, None);
    assert!(repo.find_by_number(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_repository_crud_round() {
    let repo = SeaOrmTiersRepository::new(setup_test_db().await);
    let now = chrono::Utc::now();

    let one = repo.insert(&fixture_one(), now).await.expect("insert");
    let two = repo.insert(&fixture_two(), now).await.expect("insert");
    assert!(two.id > one.id);

    let by_number = repo.find_by_number(2).await.unwrap();
    assert_eq!(by_number.map(|t| t.id), Some(two.id));

    let mut renamed = one.clone();
    renamed.name = Some("Renamed".to_string());
    renamed.updated_at = chrono::Utc::now();
    let updated = repo.update(&renamed).await.expect("update");
    assert_eq!(updated.name.as_deref(), Some("Renamed"));

    let ids: Vec<i32> = repo.list_all().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![one.id, two.id]);

    assert!(repo.delete(one.id).await.unwrap());
    assert!(!repo.delete(one.id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 1);
    assert!(repo.find_by_id(one.id).await.unwrap().is_none());
}
