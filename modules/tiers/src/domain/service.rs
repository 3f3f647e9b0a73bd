//! Domain service - business logic orchestration

use super::repository::{RepositoryError, TiersRepository};
use crate::config::Config;
use crate::contract::{NewTier, Tier, TierPatch, TiersError};
use std::sync::Arc;

/// Domain service for tiers
pub struct Service {
    repo: Arc<dyn TiersRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn TiersRepository>, config: Config) -> Self {
        Self { repo, config }
    }

    /// List all tiers
    pub async fn list_tiers(&self) -> Result<Vec<Tier>, TiersError> {
        self.repo.list_all().await.map_err(internal)
    }

    /// Total number of tiers
    pub async fn count_tiers(&self) -> Result<u64, TiersError> {
        self.repo.count().await.map_err(internal)
    }

    /// Get a tier by id
    pub async fn get_tier(&self, id: i32) -> Result<Tier, TiersError> {
        tracing::debug!(id, "Loading tier");
        self.repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(TiersError::NotFound { id })
    }

    /// Create a tier
    pub async fn create_tier(&self, new: NewTier) -> Result<Tier, TiersError> {
        if let Some(number) = new.number {
            self.ensure_number_free(number, None).await?;
        }

        let tier = self
            .repo
            .insert(&new, chrono::Utc::now())
            .await
            .map_err(write_error)?;

        tracing::info!(id = tier.id, number = ?tier.number, "Tier created");
        Ok(tier)
    }

    /// Update the given fields of a tier.
    ///
    /// When nothing differs from the stored record the record is returned
    /// as is and `updated_at` is left alone.
    pub async fn update_tier(&self, id: i32, patch: TierPatch) -> Result<Tier, TiersError> {
        let mut tier = self.get_tier(id).await?;
        let previous_number = tier.number;

        if !patch.apply_to(&mut tier) {
            tracing::debug!(id, "Tier update carried no changes");
            return Ok(tier);
        }

        if let Some(number) = tier.number.filter(|n| Some(*n) != previous_number) {
            self.ensure_number_free(number, Some(id)).await?;
        }

        tier.updated_at = chrono::Utc::now();
        let tier = self.repo.update(&tier).await.map_err(write_error)?;

        tracing::info!(id, number = ?tier.number, "Tier updated");
        Ok(tier)
    }

    /// Delete a tier
    pub async fn delete_tier(&self, id: i32) -> Result<(), TiersError> {
        if !self.repo.delete(id).await.map_err(internal)? {
            return Err(TiersError::NotFound { id });
        }

        tracing::info!(id, "Tier destroyed");
        Ok(())
    }

    // ===== Helper Methods =====

    /// Optional application-level uniqueness check, see `Config`
    async fn ensure_number_free(&self, number: i32, owner: Option<i32>) -> Result<(), TiersError> {
        if !self.config.check_number_before_write {
            return Ok(());
        }

        match self.repo.find_by_number(number).await.map_err(internal)? {
            Some(existing) if Some(existing.id) != owner => {
                tracing::warn!(number, holder = existing.id, "Tier number already taken");
                Err(TiersError::DuplicateNumber { number })
            }
            _ => Ok(()),
        }
    }
}

fn internal(err: anyhow::Error) -> TiersError {
    tracing::error!("Tier storage failure: {:?}", err);
    TiersError::Internal
}

fn write_error(err: RepositoryError) -> TiersError {
    match err {
        RepositoryError::DuplicateNumber(number) => {
            tracing::warn!(number, "Unique index rejected tier number");
            TiersError::DuplicateNumber { number }
        }
        RepositoryError::NotFound(id) => {
            tracing::debug!(id, "Tier disappeared before the write");
            TiersError::NotFound { id }
        }
        RepositoryError::Other(err) => internal(err),
    }
}
