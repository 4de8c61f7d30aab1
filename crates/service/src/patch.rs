//! Presence-aware field type for partial updates.

use models::errors::FieldViolation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of a partial-update payload.
///
/// Used with `#[serde(default)]`: an omitted key stays [`Patch::Missing`],
/// an explicit `null` becomes [`Patch::Null`] and anything else
/// [`Patch::Value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self { Patch::Missing }
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool { matches!(self, Patch::Missing) }

    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Check a field backed by a NOT NULL column: `null` is a violation,
    /// a supplied value goes through `check`.
    pub fn check_required(
        &self,
        field: &str,
        check: impl FnOnce(&T) -> Result<(), FieldViolation>,
    ) -> Result<(), FieldViolation> {
        match self {
            Patch::Missing => Ok(()),
            Patch::Null => Err(FieldViolation::new(field, "may not be null")),
            Patch::Value(v) => check(v),
        }
    }

    /// Collapse into the `Option<Option<T>>` shape of a nullable column:
    /// outer `None` leaves the column alone, `Some(None)` clears it.
    pub fn into_nullable(self) -> Option<Option<T>> {
        match self {
            Patch::Missing => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v)),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(d)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Value(v) => v.serialize(s),
            Patch::Missing | Patch::Null => s.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Serialize)]
    struct Probe {
        #[serde(default, skip_serializing_if = "Patch::is_missing")]
        description: Patch<String>,
    }

    #[test]
    fn distinguishes_missing_null_and_value() {
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.description, Patch::Missing);
        let p: Probe = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(p.description, Patch::Null);
        let p: Probe = serde_json::from_str(r#"{"description": "fast"}"#).unwrap();
        assert_eq!(p.description, Patch::Value("fast".to_string()));
    }

    #[test]
    fn nullable_shape() {
        assert_eq!(Patch::<i32>::Missing.into_nullable(), None);
        assert_eq!(Patch::<i32>::Null.into_nullable(), Some(None));
        assert_eq!(Patch::Value(3).into_nullable(), Some(Some(3)));
    }

    #[test]
    fn required_fields_reject_null() {
        let ok = |_: &i32| Ok(());
        assert!(Patch::<i32>::Missing.check_required("year", ok).is_ok());
        assert_eq!(Patch::<i32>::Null.check_required("year", ok).unwrap_err().field, "year");
        let err = Patch::Value(0).check_required("brand_id", |v| models::bike::validate_brand_id(*v));
        assert!(err.is_err());
    }

    #[test]
    fn missing_fields_are_not_serialized() {
        let body = serde_json::to_value(Probe { description: Patch::Missing }).unwrap();
        assert_eq!(body, serde_json::json!({}));
        let body = serde_json::to_value(Probe { description: Patch::Null }).unwrap();
        assert_eq!(body, serde_json::json!({"description": null}));
    }
}
