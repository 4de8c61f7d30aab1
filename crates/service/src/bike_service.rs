use async_trait::async_trait;
use models::{bike, brand};
use sea_orm::{ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};
use tracing::warn;

use crate::contracts::{BikeView, CreateBike, UpdateBike};
use crate::crud::{CrudRepository, Resource};
use crate::errors::ServiceError;
use crate::patch::Patch;

pub struct BikeResource;

pub type Bikes = CrudRepository<BikeResource>;

/// Referential check run before any bike write that carries a `brand_id`.
pub async fn ensure_brand_exists<C: ConnectionTrait>(db: &C, brand_id: i32) -> Result<(), ServiceError> {
    if brand::Entity::find_by_id(brand_id).one(db).await?.is_none() {
        warn!(brand_id, "bike references missing brand");
        return Err(ServiceError::BrandNotFound(brand_id));
    }
    Ok(())
}

#[async_trait]
impl Resource for BikeResource {
    type Entity = bike::Entity;
    type Model = bike::Model;
    type ActiveModel = bike::ActiveModel;
    type Create = CreateBike;
    type Update = UpdateBike;

    const LABEL: &'static str = "Bike";

    fn id_column() -> bike::Column { bike::Column::Id }

    fn validate_create(input: &CreateBike) -> Result<(), ServiceError> { input.validate() }

    fn validate_update(input: &UpdateBike) -> Result<(), ServiceError> { input.validate() }

    fn new_active_model(input: CreateBike) -> bike::ActiveModel {
        bike::ActiveModel {
            id: NotSet,
            brand_id: Set(input.brand_id),
            model: Set(input.model),
            year: Set(input.year),
            description: Set(input.description),
        }
    }

    fn apply_update(am: &mut bike::ActiveModel, input: UpdateBike) {
        if let Patch::Value(v) = input.brand_id { am.brand_id = Set(v); }
        if let Patch::Value(v) = input.model { am.model = Set(v); }
        if let Patch::Value(v) = input.year { am.year = Set(v); }
        if let Some(v) = input.description.into_nullable() { am.description = Set(v); }
    }

    async fn before_create<C: ConnectionTrait>(db: &C, input: &CreateBike) -> Result<(), ServiceError> {
        ensure_brand_exists(db, input.brand_id).await
    }

    async fn before_update<C: ConnectionTrait>(db: &C, _id: i32, input: &UpdateBike) -> Result<(), ServiceError> {
        match input.brand_id.value() {
            Some(brand_id) => ensure_brand_exists(db, *brand_id).await,
            None => Ok(()),
        }
    }
}

/// Resolve the brand a bike points at.
pub async fn attach_brand<C: ConnectionTrait>(db: &C, bike: bike::Model) -> Result<BikeView, ServiceError> {
    let brand = brand::Entity::find_by_id(bike.brand_id).one(db).await?;
    Ok(BikeView { bike, brand })
}

/// All bikes with their brands, fetched in one joined query.
pub async fn list_with_brand<C: ConnectionTrait>(db: &C) -> Result<Vec<BikeView>, ServiceError> {
    let rows = bike::Entity::find()
        .find_also_related(brand::Entity)
        .order_by_asc(bike::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|(bike, brand)| BikeView { bike, brand }).collect())
}
