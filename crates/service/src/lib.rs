//! Service layer providing the catalog's CRUD operations on top of models.
//! - `crud` holds the generic repository shared by brands and bikes.
//! - `brand_service` / `bike_service` plug entity-specific rules into it.
//! - Every operation takes the connection or transaction it runs on.

pub mod errors;
pub mod patch;
pub mod contracts;
pub mod crud;
pub mod brand_service;
pub mod bike_service;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use bike_service::Bikes;
pub use brand_service::Brands;
