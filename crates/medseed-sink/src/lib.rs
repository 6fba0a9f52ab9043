//! Postgres persistence for generated hospital records.

mod postgres;
mod records;
mod schema;

pub use postgres::{PgSink, SEEDED_TABLES};
pub use schema::apply_schema;
