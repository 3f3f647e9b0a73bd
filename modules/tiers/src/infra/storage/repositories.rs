//! SeaORM repository implementations

use crate::contract::{NewTier, Tier};
use crate::domain::repository::{RepositoryError, TiersRepository};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    SqlErr,
};
use std::sync::Arc;

use super::{entity, mapper};

pub struct SeaOrmTiersRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTiersRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TiersRepository for SeaOrmTiersRepository {
    async fn insert(&self, new: &NewTier, now: DateTime<Utc>) -> Result<Tier, RepositoryError> {
        let active = mapper::insert_model(new, now);

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| classify(e, new.number))?;

        Ok(result.into())
    }

    async fn update(&self, tier: &Tier) -> Result<Tier, RepositoryError> {
        let active: entity::ActiveModel = tier.into();

        let result = entity::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RepositoryError::NotFound(tier.id),
                e => classify(e, tier.number),
            })?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tier>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_by_number(&self, number: i32) -> Result<Option<Tier>> {
        let result = entity::Entity::find()
            .filter(entity::Column::Number.eq(number))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> Result<Vec<Tier>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(entity::Entity::find().count(&*self.db).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

/// `number` is the only unique column besides the primary key
fn classify(err: DbErr, number: Option<i32>) -> RepositoryError {
    match (err.sql_err(), number) {
        (Some(SqlErr::UniqueConstraintViolation(_)), Some(number)) => {
            RepositoryError::DuplicateNumber(number)
        }
        _ => RepositoryError::Other(err.into()),
    }
}
