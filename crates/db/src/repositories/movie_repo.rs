//! Repository for the `movies` table.

use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, year, genre, director";

/// Provides insert and listing for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, year, genre, director)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.year)
            .bind(&input.genre)
            .bind(&input.director)
            .fetch_one(pool)
            .await
    }

    /// List every movie in whatever order the store returns them.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }
}
