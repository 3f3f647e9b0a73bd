//! Route registration and OpenAPI document

use super::{dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    extract::Path,
    response::{Redirect, Response},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Collection path of the tier resource
pub const TIERS_PATH: &str = "/tiers";

/// Detail path of a single tier
pub fn tier_path(id: i32) -> String {
    format!("{}/{}", TIERS_PATH, id)
}

/// OpenAPI document for the tier routes
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_tiers,
        handlers::new_tier,
        handlers::create_tier,
        handlers::show_tier,
        handlers::edit_tier,
        handlers::update_tier,
        handlers::destroy_tier,
    ),
    components(schemas(
        TierDto,
        TierParams,
        TierRequest,
        TierChanges,
        UpdateTierRequest,
        TierForm,
        TiersListResponse,
        Problem
    )),
    tags((name = "tiers", description = "Numbered cart entries"))
)]
pub struct TiersApiDoc;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        .route("/tiers", get(list_tiers_handler).post(create_tier_handler))
        .route("/tiers/new", get(new_tier_handler))
        .route(
            "/tiers/{id}",
            get(show_tier_handler)
                .patch(update_tier_handler)
                .put(update_tier_handler)
                .delete(destroy_tier_handler),
        )
        .route("/tiers/{id}/edit", get(edit_tier_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_tiers_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<TiersListResponse>, Problem> {
    handlers::list_tiers(service).await
}

async fn new_tier_handler() -> Json<TierForm> {
    handlers::new_tier().await
}

async fn create_tier_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<TierRequest>,
) -> Result<Response, Problem> {
    handlers::create_tier(service, json).await
}

async fn show_tier_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<TierDto>, Problem> {
    handlers::show_tier(service, path).await
}

async fn edit_tier_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<TierForm>, Problem> {
    handlers::edit_tier(service, path).await
}

async fn update_tier_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
    json: Json<UpdateTierRequest>,
) -> Result<Response, Problem> {
    handlers::update_tier(service, path, json).await
}

async fn destroy_tier_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Redirect, Problem> {
    handlers::destroy_tier(service, path).await
}
