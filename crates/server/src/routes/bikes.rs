use axum::{extract::State, http::StatusCode, Json};
use common::types::StatusMarker;
use sea_orm::TransactionTrait;
use service::bike_service::{attach_brand, list_with_brand};
use service::contracts::{BikeView, CreateBike, UpdateBike};
use service::Bikes;
use tracing::info;

use crate::{errors::JsonApiError, extract::{ApiJson, ApiPath}, state::AppState};

#[utoipa::path(
    get, path = "/bikes", tag = "bikes",
    responses((status = 200, description = "All bikes", body = [crate::openapi::BikeDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BikeView>>, JsonApiError> {
    let txn = state.db.begin().await?;
    let bikes = list_with_brand(&txn).await?;
    txn.commit().await?;
    info!(count = bikes.len(), "list bikes");
    Ok(Json(bikes))
}

#[utoipa::path(
    post, path = "/bikes", tag = "bikes",
    request_body = crate::openapi::CreateBikeDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BikeDoc),
        (status = 404, description = "Brand Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateBike>,
) -> Result<(StatusCode, Json<BikeView>), JsonApiError> {
    info!(brand_id = input.brand_id, model = %input.model, year = input.year, "bike_create_request");
    let txn = state.db.begin().await?;
    let created = Bikes::create(&txn, input).await?;
    let view = attach_brand(&txn, created).await?;
    txn.commit().await?;
    Ok((StatusCode::CREATED, Json(view)))
}

#[utoipa::path(
    get, path = "/bikes/{id}", tag = "bikes",
    params(("id" = i32, Path, description = "Bike id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::BikeDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<BikeView>, JsonApiError> {
    let txn = state.db.begin().await?;
    let Some(found) = Bikes::get_by_id(&txn, id).await? else {
        return Err(Bikes::not_found().into());
    };
    let view = attach_brand(&txn, found).await?;
    txn.commit().await?;
    Ok(Json(view))
}

#[utoipa::path(
    patch, path = "/bikes/{id}", tag = "bikes",
    params(("id" = i32, Path, description = "Bike id")),
    request_body = crate::openapi::UpdateBikeDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::BikeDoc),
        (status = 404, description = "Bike or Brand Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<UpdateBike>,
) -> Result<Json<BikeView>, JsonApiError> {
    let txn = state.db.begin().await?;
    let Some(updated) = Bikes::patch(&txn, id, input).await? else {
        return Err(Bikes::not_found().into());
    };
    let view = attach_brand(&txn, updated).await?;
    txn.commit().await?;
    info!(id, "bike updated");
    Ok(Json(view))
}

#[utoipa::path(
    delete, path = "/bikes/{id}", tag = "bikes",
    params(("id" = i32, Path, description = "Bike id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::StatusDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<StatusMarker>, JsonApiError> {
    let txn = state.db.begin().await?;
    let Some(marker) = Bikes::delete(&txn, id).await? else {
        return Err(Bikes::not_found().into());
    };
    txn.commit().await?;
    Ok(Json(marker))
}
