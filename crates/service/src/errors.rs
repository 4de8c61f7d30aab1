use models::errors::{join_violations, FieldViolation};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),
    #[error("{0}")]
    NotFound(String),
    #[error("Brand {0} not found")]
    BrandNotFound(i32),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Field violations carried by this error, if it is a validation failure.
    pub fn violations(&self) -> Option<&[FieldViolation]> {
        match self {
            ServiceError::Validation(v) => Some(v),
            _ => None,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ServiceError::Conflict(msg),
            _ => ServiceError::Db(e.to_string()),
        }
    }
}
