use async_trait::async_trait;
use models::{bike, brand};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryFilter, QueryOrder, Set};
use tracing::warn;

use crate::contracts::{CreateBrand, UpdateBrand};
use crate::crud::{CrudRepository, Resource};
use crate::errors::ServiceError;
use crate::patch::Patch;

pub struct BrandResource;

pub type Brands = CrudRepository<BrandResource>;

/// Fail with `Conflict` if another brand (not `except`) already uses `name`.
async fn ensure_name_free<C: ConnectionTrait>(db: &C, name: &str, except: Option<i32>) -> Result<(), ServiceError> {
    let holder = brand::Entity::find()
        .filter(brand::Column::Name.eq(name.to_owned()))
        .one(db)
        .await?;
    match holder {
        Some(b) if Some(b.id) != except => {
            warn!(name, holder = b.id, "brand name taken");
            Err(ServiceError::Conflict(format!("brand name '{}' already exists", name)))
        }
        _ => Ok(()),
    }
}

#[async_trait]
impl Resource for BrandResource {
    type Entity = brand::Entity;
    type Model = brand::Model;
    type ActiveModel = brand::ActiveModel;
    type Create = CreateBrand;
    type Update = UpdateBrand;

    const LABEL: &'static str = "Brand";

    fn id_column() -> brand::Column { brand::Column::Id }

    fn validate_create(input: &CreateBrand) -> Result<(), ServiceError> { input.validate() }

    fn validate_update(input: &UpdateBrand) -> Result<(), ServiceError> { input.validate() }

    fn new_active_model(input: CreateBrand) -> brand::ActiveModel {
        brand::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            country: Set(input.country),
        }
    }

    fn apply_update(am: &mut brand::ActiveModel, input: UpdateBrand) {
        if let Patch::Value(v) = input.name { am.name = Set(v); }
        if let Patch::Value(v) = input.description { am.description = Set(v); }
        if let Patch::Value(v) = input.country { am.country = Set(v); }
    }

    async fn before_create<C: ConnectionTrait>(db: &C, input: &CreateBrand) -> Result<(), ServiceError> {
        ensure_name_free(db, &input.name, None).await
    }

    async fn before_update<C: ConnectionTrait>(db: &C, id: i32, input: &UpdateBrand) -> Result<(), ServiceError> {
        match input.name.value() {
            Some(name) => ensure_name_free(db, name, Some(id)).await,
            None => Ok(()),
        }
    }
}

/// Bikes whose `brand_id` points at this brand; `None` when the brand does not exist.
pub async fn list_bikes<C: ConnectionTrait>(db: &C, brand_id: i32) -> Result<Option<Vec<bike::Model>>, ServiceError> {
    let Some(found) = Brands::get_by_id(db, brand_id).await? else {
        return Ok(None);
    };
    let bikes = found
        .find_related(bike::Entity)
        .order_by_asc(bike::Column::Id)
        .all(db)
        .await?;
    Ok(Some(bikes))
}
