//! Request and response shapes for brands and bikes.

use models::errors::FieldViolation;
use models::{bike, brand};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::patch::Patch;

fn collect(checks: impl IntoIterator<Item = Result<(), FieldViolation>>) -> Result<(), ServiceError> {
    let violations: Vec<FieldViolation> = checks.into_iter().filter_map(Result::err).collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(violations))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateBrand {
    pub name: String,
    pub description: String,
    pub country: String,
}

impl CreateBrand {
    pub fn validate(&self) -> Result<(), ServiceError> {
        collect([brand::validate_name(&self.name), brand::validate_country(&self.country)])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UpdateBrand {
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub country: Patch<String>,
}

impl UpdateBrand {
    pub fn validate(&self) -> Result<(), ServiceError> {
        collect([
            self.name.check_required("name", |v| brand::validate_name(v)),
            self.description.check_required("description", |_| Ok(())),
            self.country.check_required("country", |v| brand::validate_country(v)),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateBike {
    pub brand_id: i32,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateBike {
    /// Field constraints only; the brand lookup happens in the repository hook.
    pub fn validate(&self) -> Result<(), ServiceError> {
        collect([bike::validate_model(&self.model), bike::validate_year(self.year)])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UpdateBike {
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub brand_id: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub model: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub year: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_missing")]
    pub description: Patch<String>,
}

impl UpdateBike {
    pub fn validate(&self) -> Result<(), ServiceError> {
        collect([
            self.brand_id.check_required("brand_id", |v| bike::validate_brand_id(*v)),
            self.model.check_required("model", |v| bike::validate_model(v)),
            self.year.check_required("year", |v| bike::validate_year(*v)),
        ])
    }
}

/// A bike together with the brand its `brand_id` resolves to, or `null`
/// when that brand has been deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BikeView {
    #[serde(flatten)]
    pub bike: bike::Model,
    pub brand: Option<brand::Model>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(e: ServiceError) -> Vec<String> {
        e.violations().unwrap().iter().map(|v| v.field.clone()).collect()
    }

    #[test]
    fn create_bike_lists_every_bad_field() {
        let input = CreateBike { brand_id: 1, model: " ".into(), year: 2018, description: None };
        assert_eq!(fields(input.validate().unwrap_err()), vec!["model", "year"]);
    }

    #[test]
    fn create_bike_description_defaults_to_absent() {
        let input: CreateBike = serde_json::from_str(r#"{"brand_id":1,"model":"Navigator","year":2022}"#).unwrap();
        assert_eq!(input.description, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_brand_requires_all_fields() {
        let missing = serde_json::from_str::<CreateBrand>(r#"{"name":"Brand"}"#);
        assert!(missing.is_err());
        let blank = CreateBrand { name: "".into(), description: "d".into(), country: "".into() };
        assert_eq!(fields(blank.validate().unwrap_err()), vec!["name", "country"]);
    }

    #[test]
    fn update_bike_checks_only_supplied_fields() {
        assert!(UpdateBike::default().validate().is_ok());

        let bad: UpdateBike = serde_json::from_str(r#"{"brand_id":0,"year":1900,"model":null}"#).unwrap();
        assert_eq!(fields(bad.validate().unwrap_err()), vec!["brand_id", "model", "year"]);

        let clear: UpdateBike = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert!(clear.validate().is_ok());
        assert_eq!(clear.description, Patch::Null);
    }

    #[test]
    fn update_brand_rejects_null_for_required_fields() {
        let bad: UpdateBrand = serde_json::from_str(r#"{"description":null,"country":"  "}"#).unwrap();
        assert_eq!(fields(bad.validate().unwrap_err()), vec!["description", "country"]);
    }

    #[test]
    fn bike_view_flattens_bike_fields() {
        let view = BikeView {
            bike: bike::Model { id: 1, brand_id: 1, model: "Navigator".into(), year: 2022, description: None },
            brand: None,
        };
        let body = serde_json::to_value(&view).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["model"], "Navigator");
        assert!(body["description"].is_null());
        assert!(body["brand"].is_null());
    }
}
