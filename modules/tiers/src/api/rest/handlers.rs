//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{form_error, map_domain_error, Problem},
    routes::{tier_path, TIERS_PATH},
};
use crate::contract::{TierPatch, TiersError};
use crate::domain::Service;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use std::sync::Arc;

/// List all tiers
#[utoipa::path(
    get,
    path = "/tiers",
    tag = "tiers",
    responses((status = 200, description = "All tiers", body = TiersListResponse))
)]
pub async fn list_tiers(service: Arc<Service>) -> Result<Json<TiersListResponse>, Problem> {
    let tiers = service.list_tiers().await.map_err(map_domain_error)?;

    let items: Vec<TierDto> = tiers.into_iter().map(|t| t.into()).collect();
    let total = items.len();

    Ok(Json(TiersListResponse { items, total }))
}

/// Blank form for a new tier
#[utoipa::path(
    get,
    path = "/tiers/new",
    tag = "tiers",
    responses((status = 200, description = "Empty tier form", body = TierForm))
)]
pub async fn new_tier() -> Json<TierForm> {
    Json(TierForm::for_new())
}

/// Create a tier and redirect to it
#[utoipa::path(
    post,
    path = "/tiers",
    tag = "tiers",
    request_body = TierRequest,
    responses(
        (status = 303, description = "Created, redirects to the tier"),
        (status = 422, description = "Rejected, form re-rendered", body = TierForm)
    )
)]
pub async fn create_tier(
    service: Arc<Service>,
    Json(req): Json<TierRequest>,
) -> Result<Response, Problem> {
    match service.create_tier(req.tier.clone().into()).await {
        Ok(tier) => Ok(Redirect::to(&tier_path(tier.id)).into_response()),
        Err(error) => rerender(TierForm::for_new().with_tier(req.tier), error),
    }
}

/// Get a single tier
#[utoipa::path(
    get,
    path = "/tiers/{id}",
    tag = "tiers",
    params(("id" = i32, Path, description = "Tier identifier")),
    responses(
        (status = 200, description = "The tier", body = TierDto),
        (status = 404, description = "No such tier", body = Problem)
    )
)]
pub async fn show_tier(
    service: Arc<Service>,
    Path(id): Path<i32>,
) -> Result<Json<TierDto>, Problem> {
    let tier = service.get_tier(id).await.map_err(map_domain_error)?;

    Ok(Json(tier.into()))
}

/// Form pre-filled with a tier's current values
#[utoipa::path(
    get,
    path = "/tiers/{id}/edit",
    tag = "tiers",
    params(("id" = i32, Path, description = "Tier identifier")),
    responses(
        (status = 200, description = "Tier form", body = TierForm),
        (status = 404, description = "No such tier", body = Problem)
    )
)]
pub async fn edit_tier(
    service: Arc<Service>,
    Path(id): Path<i32>,
) -> Result<Json<TierForm>, Problem> {
    let tier = service.get_tier(id).await.map_err(map_domain_error)?;

    Ok(Json(TierForm::for_edit(id, (&tier).into())))
}

/// Update a tier and redirect to it
#[utoipa::path(
    patch,
    path = "/tiers/{id}",
    tag = "tiers",
    params(("id" = i32, Path, description = "Tier identifier")),
    request_body = UpdateTierRequest,
    responses(
        (status = 303, description = "Updated, redirects to the tier"),
        (status = 404, description = "No such tier", body = Problem),
        (status = 422, description = "Rejected, form re-rendered", body = TierForm)
    )
)]
pub async fn update_tier(
    service: Arc<Service>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateTierRequest>,
) -> Result<Response, Problem> {
    let patch: TierPatch = req.tier.into();

    match service.update_tier(id, patch.clone()).await {
        Ok(tier) => Ok(Redirect::to(&tier_path(tier.id)).into_response()),
        Err(error) if form_error(&error).is_some() => {
            // Re-render with the stored record carrying the attempted changes
            let mut attempted = service.get_tier(id).await.map_err(map_domain_error)?;
            patch.apply_to(&mut attempted);
            rerender(TierForm::for_edit(id, (&attempted).into()), error)
        }
        Err(error) => Err(map_domain_error(error)),
    }
}

/// Delete a tier and redirect to the list
#[utoipa::path(
    delete,
    path = "/tiers/{id}",
    tag = "tiers",
    params(("id" = i32, Path, description = "Tier identifier")),
    responses(
        (status = 303, description = "Deleted, redirects to the list"),
        (status = 404, description = "No such tier", body = Problem)
    )
)]
pub async fn destroy_tier(service: Arc<Service>, Path(id): Path<i32>) -> Result<Redirect, Problem> {
    service.delete_tier(id).await.map_err(map_domain_error)?;

    Ok(Redirect::to(TIERS_PATH))
}

fn rerender(form: TierForm, error: TiersError) -> Result<Response, Problem> {
    match form_error(&error) {
        Some(message) => {
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(form.with_error(message))).into_response())
        }
        None => Err(map_domain_error(error)),
    }
}
