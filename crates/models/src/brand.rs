use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bike;
use crate::errors::{check_text, FieldViolation};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "brand")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub country: String,
}

/// `bikes` is not stored on the brand row; it is derived through `bike.brand_id`.
#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Bikes,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Bikes => Entity::has_many(bike::Entity).into(),
        }
    }
}

impl Related<bike::Entity> for Entity {
    fn to() -> RelationDef { Relation::Bikes.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), FieldViolation> {
    check_text("name", name)
}

pub fn validate_country(country: &str) -> Result<(), FieldViolation> {
    check_text("country", country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_and_country_are_rejected() {
        assert!(validate_name("Stels").is_ok());
        assert_eq!(validate_name("  ").unwrap_err().field, "name");
        assert!(validate_country("Russia").is_ok());
        assert_eq!(validate_country("").unwrap_err().field, "country");
        assert!(validate_name(&"N".repeat(129)).is_err());
    }
}
