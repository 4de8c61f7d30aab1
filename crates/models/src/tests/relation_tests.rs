use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet, Set};

use crate::{bike, brand, db};

async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn insert_brand(db: &DatabaseConnection, name: &str) -> Result<brand::Model> {
    let am = brand::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set("desc".into()),
        country: Set("Russia".into()),
    };
    Ok(am.insert(db).await?)
}

async fn insert_bike(db: &DatabaseConnection, brand_id: i32, model: &str) -> Result<bike::Model> {
    let am = bike::ActiveModel {
        id: NotSet,
        brand_id: Set(brand_id),
        model: Set(model.to_string()),
        year: Set(2022),
        description: Set(None),
    };
    Ok(am.insert(db).await?)
}

#[tokio::test]
async fn ids_are_assigned_by_the_store() -> Result<()> {
    let db = setup_test_db().await?;
    let first = insert_brand(&db, "Stels").await?;
    let second = insert_brand(&db, "Outleap").await?;
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let bike = insert_bike(&db, first.id, "Navigator").await?;
    assert_eq!(bike.id, 1);
    assert_eq!(bike.description, None);
    Ok(())
}

#[tokio::test]
async fn brand_bikes_are_derived_from_brand_id() -> Result<()> {
    let db = setup_test_db().await?;
    let stels = insert_brand(&db, "Stels").await?;
    let outleap = insert_brand(&db, "Outleap").await?;
    insert_bike(&db, stels.id, "Navigator").await?;
    insert_bike(&db, stels.id, "Pilot").await?;
    insert_bike(&db, outleap.id, "Riot Pro").await?;

    let bikes = stels.find_related(bike::Entity).all(&db).await?;
    let mut models: Vec<_> = bikes.into_iter().map(|b| b.model).collect();
    models.sort();
    assert_eq!(models, vec!["Navigator".to_string(), "Pilot".to_string()]);

    let owner = bike::Entity::find_by_id(3).find_also_related(brand::Entity).one(&db).await?;
    let (bike, brand) = owner.expect("bike 3");
    assert_eq!(bike.model, "Riot Pro");
    assert_eq!(brand.map(|b| b.name), Some("Outleap".to_string()));
    Ok(())
}

#[tokio::test]
async fn brand_name_is_unique_in_the_store() -> Result<()> {
    let db = setup_test_db().await?;
    insert_brand(&db, "Stels").await?;
    assert!(insert_brand(&db, "Stels").await.is_err());
    Ok(())
}

#[tokio::test]
async fn deleting_a_brand_orphans_its_bikes() -> Result<()> {
    let db = setup_test_db().await?;
    let stels = insert_brand(&db, "Stels").await?;
    let bike = insert_bike(&db, stels.id, "Navigator").await?;

    brand::Entity::delete_by_id(stels.id).exec(&db).await?;

    let found = bike::Entity::find_by_id(bike.id).find_also_related(brand::Entity).one(&db).await?;
    let (still_there, owner) = found.expect("bike survives brand delete");
    assert_eq!(still_there.brand_id, stels.id);
    assert!(owner.is_none());
    Ok(())
}
