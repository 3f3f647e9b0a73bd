//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{NewTier, Tier, TierPatch, TiersApi, TiersError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TiersApi for NativeClient {
    async fn list_tiers(&self) -> Result<Vec<Tier>, TiersError> {
        self.service.list_tiers().await
    }

    async fn count_tiers(&self) -> Result<u64, TiersError> {
        self.service.count_tiers().await
    }

    async fn get_tier(&self, id: i32) -> Result<Tier, TiersError> {
        self.service.get_tier(id).await
    }

    async fn create_tier(&self, new: NewTier) -> Result<Tier, TiersError> {
        self.service.create_tier(new).await
    }

    async fn update_tier(&self, id: i32, patch: TierPatch) -> Result<Tier, TiersError> {
        self.service.update_tier(id, patch).await
    }

    async fn delete_tier(&self, id: i32) -> Result<(), TiersError> {
        self.service.delete_tier(id).await
    }
}
