//! Module declaration and lifecycle implementation

use crate::config::Config;
use crate::contract::TiersApi;
use crate::domain::Service;
use crate::infra::storage::{migrations::Migrator, SeaOrmTiersRepository};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Tiers module
pub struct TiersModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for TiersModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl TiersModule {
    /// Wire repository and domain service over `db`
    pub fn init(&self, cfg: Config, db: Arc<DatabaseConnection>) -> Result<()> {
        *self.config.write() = cfg.clone();

        let repo = Arc::new(SeaOrmTiersRepository::new(db));
        let service = Arc::new(Service::new(repo, cfg));
        *self.service.write() = Some(service);

        tracing::info!("Tiers module initialized");
        Ok(())
    }

    /// Apply pending migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("Tiers migrations completed");
        Ok(())
    }

    /// Revert the most recent migration
    pub async fn rollback(&self, db: &DatabaseConnection) -> Result<()> {
        Migrator::down(db, Some(1)).await?;
        tracing::info!("Tiers migration rolled back");
        Ok(())
    }

    /// Effective module configuration
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Register the REST routes onto `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering tiers REST routes");
        crate::api::rest::routes::register_routes(router, service)
    }

    /// OpenAPI document of the REST routes
    pub fn openapi(&self) -> utoipa::openapi::OpenApi {
        use utoipa::OpenApi;
        crate::api::rest::routes::TiersApiDoc::openapi()
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn TiersApi>> {
        let service = self.service()?;
        Ok(Arc::new(crate::api::native::NativeClient::new(service)))
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}
