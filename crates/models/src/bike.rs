use chrono::{Datelike, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::brand;
use crate::errors::{check_text, FieldViolation};

/// Oldest model year the catalog accepts.
pub const MIN_YEAR: i32 = 2019;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bike")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub brand_id: i32,
    pub model: String,
    pub year: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Brand,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Brand => Entity::belongs_to(brand::Entity)
                .from(Column::BrandId)
                .to(brand::Column::Id)
                .into(),
        }
    }
}

impl Related<brand::Entity> for Entity {
    fn to() -> RelationDef { Relation::Brand.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Calendar year of the wall clock, the moving upper bound for `year`.
pub fn current_year() -> i32 {
    Utc::now().year()
}

pub fn validate_year(year: i32) -> Result<(), FieldViolation> {
    validate_year_at(year, current_year())
}

pub fn validate_year_at(year: i32, current_year: i32) -> Result<(), FieldViolation> {
    if year < MIN_YEAR || year > current_year {
        return Err(FieldViolation::new(
            "year",
            format!("must be between {MIN_YEAR} and {current_year}"),
        ));
    }
    Ok(())
}

pub fn validate_model(model: &str) -> Result<(), FieldViolation> {
    check_text("model", model)
}

pub fn validate_brand_id(brand_id: i32) -> Result<(), FieldViolation> {
    if brand_id <= 0 {
        return Err(FieldViolation::new("brand_id", "must be a positive integer"));
    }
    Ok(())
}
