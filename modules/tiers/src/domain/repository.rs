//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{NewTier, Tier};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failure of a write against the `tiers` table
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The unique index on `number` rejected the write
    #[error("number {0} is already taken")]
    DuplicateNumber(i32),
    /// The row to update no longer exists
    #[error("tier {0} not found")]
    NotFound(i32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Repository for tiers
#[async_trait]
pub trait TiersRepository: Send + Sync {
    /// Insert a new tier with both timestamps set to `now`
    async fn insert(&self, new: &NewTier, now: DateTime<Utc>) -> Result<Tier, RepositoryError>;

    /// Persist every mutable field and `updated_at` of an existing tier.
    ///
    /// Fails with `NotFound` when the row is gone.
    async fn update(&self, tier: &Tier) -> Result<Tier, RepositoryError>;

    /// Find a tier by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Tier>>;

    /// Find the tier holding `number`, if any
    async fn find_by_number(&self, number: i32) -> Result<Option<Tier>>;

    /// List all tiers ordered by id
    async fn list_all(&self) -> Result<Vec<Tier>>;

    /// Count all tiers
    async fn count(&self) -> Result<u64>;

    /// Delete a tier, returning whether a row was removed
    async fn delete(&self, id: i32) -> Result<bool>;
}
