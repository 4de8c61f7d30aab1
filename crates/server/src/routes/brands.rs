use axum::{extract::State, http::StatusCode, Json};
use common::types::StatusMarker;
use models::{bike, brand};
use sea_orm::TransactionTrait;
use service::brand_service;
use service::contracts::{CreateBrand, UpdateBrand};
use service::Brands;
use tracing::info;

use crate::{errors::JsonApiError, extract::{ApiJson, ApiPath}, state::AppState};

#[utoipa::path(
    get, path = "/brands", tag = "brands",
    responses((status = 200, description = "All brands", body = [crate::openapi::BrandDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<brand::Model>>, JsonApiError> {
    let txn = state.db.begin().await?;
    let brands = Brands::list_all(&txn).await?;
    txn.commit().await?;
    info!(count = brands.len(), "list brands");
    Ok(Json(brands))
}

#[utoipa::path(
    post, path = "/brands", tag = "brands",
    request_body = crate::openapi::CreateBrandDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BrandDoc),
        (status = 409, description = "Name already taken"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateBrand>,
) -> Result<(StatusCode, Json<brand::Model>), JsonApiError> {
    info!(name = %input.name, country = %input.country, "brand_create_request");
    let txn = state.db.begin().await?;
    let created = Brands::create(&txn, input).await?;
    txn.commit().await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/brands/{id}", tag = "brands",
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::BrandDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<brand::Model>, JsonApiError> {
    let txn = state.db.begin().await?;
    let found = Brands::get_by_id(&txn, id).await?;
    txn.commit().await?;
    found.map(Json).ok_or_else(|| Brands::not_found().into())
}

#[utoipa::path(
    patch, path = "/brands/{id}", tag = "brands",
    params(("id" = i32, Path, description = "Brand id")),
    request_body = crate::openapi::UpdateBrandDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::BrandDoc),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Name already taken"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<UpdateBrand>,
) -> Result<Json<brand::Model>, JsonApiError> {
    let txn = state.db.begin().await?;
    let Some(updated) = Brands::patch(&txn, id, input).await? else {
        return Err(Brands::not_found().into());
    };
    txn.commit().await?;
    info!(id, "brand updated");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/brands/{id}", tag = "brands",
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::StatusDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<StatusMarker>, JsonApiError> {
    let txn = state.db.begin().await?;
    let Some(marker) = Brands::delete(&txn, id).await? else {
        return Err(Brands::not_found().into());
    };
    txn.commit().await?;
    Ok(Json(marker))
}

#[utoipa::path(
    get, path = "/brands/{id}/bikes", tag = "brands",
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Bikes of the brand", body = [crate::openapi::BikeRowDoc]),
        (status = 404, description = "Not Found")
    )
)]
pub async fn list_bikes(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<Vec<bike::Model>>, JsonApiError> {
    let txn = state.db.begin().await?;
    let bikes = brand_service::list_bikes(&txn, id).await?;
    txn.commit().await?;
    bikes.map(Json).ok_or_else(|| Brands::not_found().into())
}
