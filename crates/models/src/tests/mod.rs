/// Entity mapping and brand/bike relation tests against in-memory SQLite.
pub mod relation_tests;
