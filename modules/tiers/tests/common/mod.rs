//! Common test utilities: fixtures, an in-memory repository, and a
//! migrated SQLite database

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::collections::BTreeMap;
use std::sync::Arc;
use tiers::config::Config;
use tiers::contract::{NewTier, Tier};
use tiers::domain::{RepositoryError, Service, TiersRepository};
use tiers::TiersModule;

/// Field set of the `one` fixture
pub fn fixture_one() -> NewTier {
    NewTier {
        cart: Some("MyString".to_string()),
        number: Some(1),
        name: Some("MyString".to_string()),
        notes: Some("MyText".to_string()),
    }
}

/// Field set of the `two` fixture
pub fn fixture_two() -> NewTier {
    NewTier {
        cart: Some("OtherCart".to_string()),
        number: Some(2),
        name: Some("Second".to_string()),
        notes: Some("More text".to_string()),
    }
}

/// In-memory repository that enforces the unique `number` like the index does
#[derive(Clone, Default)]
pub struct MockTiersRepo {
    data: Arc<RwLock<BTreeMap<i32, Tier>>>,
    next_id: Arc<RwLock<i32>>,
}

impl MockTiersRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tiers
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    fn number_taken(&self, number: Option<i32>, except: Option<i32>) -> Option<i32> {
        let number = number?;
        self.data
            .read()
            .values()
            .any(|t| t.number == Some(number) && Some(t.id) != except)
            .then_some(number)
    }
}

#[async_trait]
impl TiersRepository for MockTiersRepo {
    async fn insert(&self, new: &NewTier, now: DateTime<Utc>) -> Result<Tier, RepositoryError> {
        if let Some(number) = self.number_taken(new.number, None) {
            return Err(RepositoryError::DuplicateNumber(number));
        }

        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        let tier = Tier {
            id,
            cart: new.cart.clone(),
            number: new.number,
            name: new.name.clone(),
            notes: new.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        self.data.write().insert(id, tier.clone());
        Ok(tier)
    }

    async fn update(&self, tier: &Tier) -> Result<Tier, RepositoryError> {
        if let Some(number) = self.number_taken(tier.number, Some(tier.id)) {
            return Err(RepositoryError::DuplicateNumber(number));
        }

        let mut data = self.data.write();
        match data.get_mut(&tier.id) {
            Some(stored) => {
                *stored = tier.clone();
                Ok(tier.clone())
            }
            None => Err(RepositoryError::NotFound(tier.id)),
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tier>> {
        Ok(self.data.read().get(&id).cloned())
    }

    async fn find_by_number(&self, number: i32) -> Result<Option<Tier>> {
        Ok(self
            .data
            .read()
            .values()
            .find(|t| t.number == Some(number))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Tier>> {
        Ok(self.data.read().values().cloned().collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.data.read().len() as u64)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.data.write().remove(&id).is_some())
    }
}

pub fn create_test_service(config: Config) -> (Service, MockTiersRepo) {
    let repo = MockTiersRepo::new();
    let service = Service::new(Arc::new(repo.clone()), config);
    (service, repo)
}

/// Fresh in-memory SQLite database with migrations applied
pub async fn setup_test_db() -> Arc<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Should connect to in-memory database");

    TiersModule::default()
        .migrate(&db)
        .await
        .expect("Migrations should apply");

    Arc::new(db)
}

/// Initialized module over a fresh database
pub async fn setup_module(config: Config) -> (TiersModule, Arc<DatabaseConnection>) {
    let db = setup_test_db().await;
    let module = TiersModule::default();
    module
        .init(config, db.clone())
        .expect("Module should initialize");
    (module, db)
}
