use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Client-facing failure: `{"error": <title>, "detail": <message or field list>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: serde_json::Value,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        let detail = detail.map(serde_json::Value::String).unwrap_or(serde_json::Value::Null);
        Self { status, error, detail }
    }

}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.error, "detail": self.detail}))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        if let Some(violations) = e.violations() {
            return Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: "Validation Error",
                detail: serde_json::to_value(violations).unwrap_or_default(),
            };
        }
        match e {
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::BrandNotFound(_) => Self::new(StatusCode::NOT_FOUND, "Brand Not Found", Some(e.to_string())),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "Conflict", Some(msg)),
            ServiceError::Db(_) | ServiceError::Validation(_) => {
                error!(err = %e, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Error", Some(e.to_string()))
            }
        }
    }
}

impl From<DbErr> for JsonApiError {
    fn from(e: DbErr) -> Self { ServiceError::from(e).into() }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        let status = r.status();
        let error = match status {
            StatusCode::UNPROCESSABLE_ENTITY => "Validation Error",
            other => other.canonical_reason().unwrap_or("Bad Request"),
        };
        Self::new(status, error, Some(r.body_text()))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self {
        let status = r.status();
        Self::new(status, status.canonical_reason().unwrap_or("Bad Request"), Some(r.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::FieldViolation;

    #[test]
    fn service_errors_map_to_status_codes() {
        let e: JsonApiError = ServiceError::Validation(vec![FieldViolation::new("year", "too old")]).into();
        assert_eq!(e.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(e.detail, serde_json::json!([{"field": "year", "message": "too old"}]));

        let e: JsonApiError = ServiceError::not_found("Bike").into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.detail, "Bike not found");

        let e: JsonApiError = ServiceError::BrandNotFound(3).into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.error, "Brand Not Found");
        assert_eq!(e.detail, "Brand 3 not found");

        let e: JsonApiError = ServiceError::Conflict("taken".into()).into();
        assert_eq!(e.status, StatusCode::CONFLICT);

        let e: JsonApiError = ServiceError::Db("boom".into()).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
