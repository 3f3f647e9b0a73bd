//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with tiers.
//! NO HTTP - direct function calls.

use super::{
    error::TiersError,
    model::{NewTier, Tier, TierPatch},
};
use async_trait::async_trait;

/// Tiers API for inter-module communication
#[async_trait]
pub trait TiersApi: Send + Sync {
    /// List all tiers ordered by id
    async fn list_tiers(&self) -> Result<Vec<Tier>, TiersError>;

    /// Total number of tiers
    async fn count_tiers(&self) -> Result<u64, TiersError>;

    /// Get a tier by id
    async fn get_tier(&self, id: i32) -> Result<Tier, TiersError>;

    /// Create a tier
    async fn create_tier(&self, new: NewTier) -> Result<Tier, TiersError>;

    /// Update the given fields of a tier
    async fn update_tier(&self, id: i32, patch: TierPatch) -> Result<Tier, TiersError>;

    /// Delete a tier
    async fn delete_tier(&self, id: i32) -> Result<(), TiersError>;
}
