//! Create `bike` table.
//!
//! `brand_id` is indexed but has no FK constraint: deleting a brand leaves
//! its bikes in place, and the service layer checks the brand on writes.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bike::Table)
                    .if_not_exists()
                    .col(pk_auto(Bike::Id))
                    .col(integer(Bike::BrandId))
                    .col(string_len(Bike::Model, 128))
                    .col(integer(Bike::Year))
                    .col(text_null(Bike::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bike_brand_id")
                    .table(Bike::Table)
                    .col(Bike::BrandId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bike::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bike { Table, Id, BrandId, Model, Year, Description }
