//! PostgreSQL access for the movie-rentals store: pool construction,
//! connection settings, the schema initializer and one repository per table.

use std::time::Duration;

use movie_rentals_core::error::CoreError;
use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod models;
pub mod repositories;
pub mod schema;

pub use config::DbConfig;
pub use schema::init_schema;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the given settings.
///
/// The pool connects lazily: an unreachable server surfaces on the first
/// query rather than here.
pub fn create_pool(config: &DbConfig) -> Result<DbPool, CoreError> {
    let options = config.connect_options()?;
    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy_with(options))
}
