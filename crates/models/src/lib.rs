//! Catalog entities (`brand`, `bike`), their relation and field validators.

pub mod errors;
pub mod db;
pub mod brand;
pub mod bike;

#[cfg(test)]
mod tests;
