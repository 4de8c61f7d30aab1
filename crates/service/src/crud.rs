//! Generic CRUD repository shared by every catalog entity.
//!
//! An entity plugs in through [`Resource`]: how to build and patch its active
//! model, which field constraints apply, and optional hooks that run against
//! the store before a write. [`CrudRepository`] supplies the five operations
//! once for all of them.

use std::marker::PhantomData;

use async_trait::async_trait;
use common::types::StatusMarker;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};
use tracing::{info, instrument};

use crate::errors::ServiceError;

#[async_trait]
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel>;
    type Model: IntoActiveModel<Self::ActiveModel> + Clone + Send + Sync + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;
    type Create: Send + Sync + 'static;
    type Update: Send + Sync + 'static;

    /// Entity name used in log events and not-found messages.
    const LABEL: &'static str;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn validate_create(input: &Self::Create) -> Result<(), ServiceError>;

    fn validate_update(input: &Self::Update) -> Result<(), ServiceError>;

    fn new_active_model(input: Self::Create) -> Self::ActiveModel;

    /// Copy the supplied fields of `input` onto `am`; omitted fields stay untouched.
    fn apply_update(am: &mut Self::ActiveModel, input: Self::Update);

    /// Runs after validation and before the insert.
    async fn before_create<C: ConnectionTrait>(_db: &C, _input: &Self::Create) -> Result<(), ServiceError> {
        Ok(())
    }

    /// Runs after the target row was found and before the update.
    async fn before_update<C: ConnectionTrait>(_db: &C, _id: i32, _input: &Self::Update) -> Result<(), ServiceError> {
        Ok(())
    }
}

/// CRUD operations for one [`Resource`].
///
/// Operations take the connection explicitly, so callers decide whether they
/// run on the pool or inside a transaction. A missing row is `Ok(None)`,
/// never an error.
pub struct CrudRepository<R: Resource> {
    _resource: PhantomData<R>,
}

impl<R: Resource> CrudRepository<R> {
    /// The error handlers return when an operation came back with `None`.
    pub fn not_found() -> ServiceError {
        ServiceError::not_found(R::LABEL)
    }

    /// Every stored record in id order.
    #[instrument(skip_all, fields(entity = R::LABEL))]
    pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<R::Model>, ServiceError> {
        let rows = R::Entity::find().order_by_asc(R::id_column()).all(db).await?;
        Ok(rows)
    }

    #[instrument(skip_all, fields(entity = R::LABEL, id = id))]
    pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<R::Model>, ServiceError> {
        let found = R::Entity::find().filter(R::id_column().eq(id)).one(db).await?;
        Ok(found)
    }

    #[instrument(skip_all, fields(entity = R::LABEL))]
    pub async fn create<C: ConnectionTrait>(db: &C, input: R::Create) -> Result<R::Model, ServiceError> {
        R::validate_create(&input)?;
        R::before_create(db, &input).await?;
        let created = R::new_active_model(input).insert(db).await?;
        info!(entity = R::LABEL, "record created");
        Ok(created)
    }

    /// Remove the row; `None` when nothing matched. Related rows are left alone.
    #[instrument(skip_all, fields(entity = R::LABEL, id = id))]
    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<StatusMarker>, ServiceError> {
        let res = R::Entity::delete_many().filter(R::id_column().eq(id)).exec(db).await?;
        if res.rows_affected == 0 {
            return Ok(None);
        }
        info!(entity = R::LABEL, id, "record deleted");
        Ok(Some(StatusMarker::success()))
    }

    /// Sparse merge of `input` onto the stored row.
    #[instrument(skip_all, fields(entity = R::LABEL, id = id))]
    pub async fn patch<C: ConnectionTrait>(db: &C, id: i32, input: R::Update) -> Result<Option<R::Model>, ServiceError> {
        R::validate_update(&input)?;
        let Some(existing) = Self::get_by_id(db, id).await? else {
            return Ok(None);
        };
        R::before_update(db, id, &input).await?;

        let mut am = existing.clone().into_active_model();
        R::apply_update(&mut am, input);
        if !am.is_changed() {
            return Ok(Some(existing));
        }
        let updated = am.update(db).await?;
        info!(entity = R::LABEL, id, "record patched");
        Ok(Some(updated))
    }
}
