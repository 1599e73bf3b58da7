// Postgres persistence for Homestat
//
// Decision: runtime-checked sqlx queries (query_as) rather than the macro
// forms, so the crate builds without a live database.

pub mod auth_store;
pub mod models;
pub mod repositories;

pub use repositories::Database;
